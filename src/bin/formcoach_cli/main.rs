// ABOUTME: FormCoach CLI - command-line front end for the coaching flows
// ABOUTME: Login/register, photo analysis, plan generation, chat, tracker, and profile commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach
//!
//! Usage:
//! ```bash
//! # Create an account, then log in
//! formcoach-cli register --username sam --email sam@example.com --password pw --confirm-password pw
//! formcoach-cli login --email sam@example.com --password pw
//!
//! # Analyze a photo and generate a workout plan
//! formcoach-cli plan --user sam photo.jpg
//!
//! # Ask the coach a question
//! formcoach-cli chat "How many rest days per week?"
//!
//! # Live-tracker feedback from a single frame or audio clip
//! formcoach-cli track frame frame.jpg
//! formcoach-cli track audio clip.wav
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use formcoach::config::FormCoachConfig;
use formcoach::logging::LoggingConfig;
use formcoach::session::SessionStore;
use formcoach::CoachingService;

#[derive(Parser)]
#[command(
    name = "formcoach-cli",
    about = "FormCoach coaching CLI",
    long_about = "Command-line front end for the FormCoach coaching services: photo analysis, workout plan generation, chat, live tracking, and profile management."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Session file override (defaults to the platform data directory)
    #[arg(long, global = true)]
    session_file: Option<std::path::PathBuf>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Log in and persist the session token
    Login {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Create a new account
    Register {
        /// Public username
        #[arg(long)]
        username: String,
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
        /// Password confirmation, must match
        #[arg(long)]
        confirm_password: String,
    },

    /// Clear the persisted session
    Logout,

    /// Analyze a photo and print the detected landmarks
    Analyze {
        /// Path to a JPEG photo
        image: std::path::PathBuf,
    },

    /// Analyze a photo and generate a workout plan
    Plan {
        /// Path to a JPEG photo
        image: std::path::PathBuf,
        /// User id owning the profile document
        #[arg(long)]
        user: String,
    },

    /// Send one message to the coaching chatbot
    Chat {
        /// Message text
        message: String,
    },

    /// Live-tracker feedback commands
    Track {
        #[command(subcommand)]
        action: TrackCommand,
    },

    /// Profile management commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Upload a profile picture and record it on the profile
    Upload {
        /// Path to a JPEG image
        image: std::path::PathBuf,
        /// User id owning the profile document
        #[arg(long)]
        user: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TrackCommand {
    /// Analyze one tracker frame for form tips
    Frame {
        /// Path to a JPEG frame
        image: std::path::PathBuf,
    },
    /// Analyze a WAV clip for breathing loudness or tempo
    Audio {
        /// Path to a WAV clip
        audio: std::path::PathBuf,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Print the stored profile document
    Show {
        /// User id owning the profile document
        #[arg(long)]
        user: String,
    },
    /// Update profile fields (merge-patch; unset fields are untouched)
    Set {
        /// User id owning the profile document
        #[arg(long)]
        user: String,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New height in centimeters
        #[arg(long)]
        height: Option<f64>,
        /// New weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// New gender (male, female, other)
        #[arg(long)]
        gender: Option<String>,
        /// New goal (lose_weight, gain_muscle, stay_fit)
        #[arg(long)]
        goal: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    LoggingConfig::from_env().init()?;

    let cli = Cli::parse();
    let config = FormCoachConfig::from_env()?;
    let session = match cli.session_file {
        Some(path) => SessionStore::at_path(path),
        None => SessionStore::in_data_dir()?,
    };
    let service = CoachingService::from_config(&config, session);

    match cli.command {
        Command::Login { email, password } => commands::login(&service, &email, &password).await,
        Command::Register {
            username,
            email,
            password,
            confirm_password,
        } => commands::register(&service, &username, &email, &password, &confirm_password).await,
        Command::Logout => commands::logout(&service),
        Command::Analyze { image } => commands::analyze(&service, &image).await,
        Command::Plan { image, user } => commands::plan(&service, &user, &image).await,
        Command::Chat { message } => commands::chat(&service, &message).await,
        Command::Track { action } => match action {
            TrackCommand::Frame { image } => commands::track_frame(&service, &image).await,
            TrackCommand::Audio { audio } => commands::track_audio(&service, &audio).await,
        },
        Command::Profile { action } => match action {
            ProfileCommand::Show { user } => commands::show_profile(&service, &user).await,
            ProfileCommand::Set {
                user,
                name,
                height,
                weight,
                gender,
                goal,
            } => {
                commands::set_profile(&service, &user, name, height, weight, gender, goal).await
            }
        },
        Command::Upload { image, user } => commands::upload(&service, &user, &image).await,
    }
}
