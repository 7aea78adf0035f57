// ABOUTME: Command handlers for the FormCoach CLI
// ABOUTME: Reads input files, drives CoachingService flows, and prints results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach

use std::path::Path;

use anyhow::{Context, Result};

use formcoach::core::models::{FitnessGoal, Gender, ProfileUpdate};
use formcoach::CoachingService;

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

pub async fn login(service: &CoachingService, email: &str, password: &str) -> Result<()> {
    service.login(email, password).await?;
    println!("Logged in. Session token stored.");
    Ok(())
}

pub async fn register(
    service: &CoachingService,
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<()> {
    service
        .register(username, email, password, confirm_password)
        .await?;
    println!("Account created. You can now log in.");
    Ok(())
}

pub fn logout(service: &CoachingService) -> Result<()> {
    service.logout()?;
    println!("Session cleared.");
    Ok(())
}

pub async fn analyze(service: &CoachingService, image: &Path) -> Result<()> {
    let analysis = service.analyze_photo(&read_file(image)?).await?;
    println!("Detected {} landmarks:", analysis.landmarks.len());
    for lm in &analysis.landmarks {
        let name = lm.name.as_deref().unwrap_or("-");
        println!("  {:>2}  {:<20} x={:.3} y={:.3}", lm.id, name, lm.x, lm.y);
    }
    Ok(())
}

pub async fn plan(service: &CoachingService, user: &str, image: &Path) -> Result<()> {
    let plan = service.plan_from_photo(user, &read_file(image)?).await?;
    println!("{}", plan.title);
    println!("{}", "=".repeat(plan.title.len()));
    for item in &plan.workout {
        println!(
            "- {}: {} sets x {} ({})",
            item.exercise.name, item.sets, item.reps, item.exercise.muscle_group
        );
    }
    Ok(())
}

pub async fn chat(service: &CoachingService, message: &str) -> Result<()> {
    let reply = service.chat(message).await?;
    println!("{reply}");
    Ok(())
}

pub async fn track_frame(service: &CoachingService, image: &Path) -> Result<()> {
    let feedback = service.track_frame(&read_file(image)?).await?;
    if feedback.tips.is_empty() {
        println!("No tips for this frame.");
    } else {
        println!("{}", feedback.tips.join(" | "));
    }
    Ok(())
}

pub async fn track_audio(service: &CoachingService, audio: &Path) -> Result<()> {
    let feedback = service.track_audio(&read_file(audio)?).await?;
    match (feedback.rms, feedback.tempo) {
        (Some(rms), _) => println!("Audio RMS: {rms:.3}"),
        (None, Some(tempo)) => println!("Tempo: {tempo:.1} BPM"),
        (None, None) => println!("No audio metrics returned."),
    }
    Ok(())
}

pub async fn show_profile(service: &CoachingService, user: &str) -> Result<()> {
    let profile = service.profile(user).await?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

pub async fn set_profile(
    service: &CoachingService,
    user: &str,
    name: Option<String>,
    height: Option<f64>,
    weight: Option<f64>,
    gender: Option<String>,
    goal: Option<String>,
) -> Result<()> {
    let update = ProfileUpdate {
        name,
        height,
        weight,
        gender: gender.as_deref().map(parse_gender).transpose()?,
        goal: goal.as_deref().map(parse_goal).transpose()?,
        profile_pic: None,
    };
    service.update_profile(user, &update).await?;
    println!("Profile updated.");
    Ok(())
}

pub async fn upload(service: &CoachingService, user: &str, image: &Path) -> Result<()> {
    let url = service
        .update_profile_picture(user, &read_file(image)?)
        .await?;
    println!("Uploaded: {url}");
    Ok(())
}

fn parse_gender(value: &str) -> Result<Gender> {
    match value.to_lowercase().as_str() {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        "other" => Ok(Gender::Other),
        _ => anyhow::bail!("gender must be one of: male, female, other"),
    }
}

fn parse_goal(value: &str) -> Result<FitnessGoal> {
    match value.to_lowercase().as_str() {
        "lose_weight" => Ok(FitnessGoal::LoseWeight),
        "gain_muscle" => Ok(FitnessGoal::GainMuscle),
        "stay_fit" => Ok(FitnessGoal::StayFit),
        _ => anyhow::bail!("goal must be one of: lose_weight, gain_muscle, stay_fit"),
    }
}
