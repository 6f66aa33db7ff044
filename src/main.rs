//! tubetile - YouTube preview/playback widget demo
//!
//! Opens a window with one preview tile for the given URL. Playback surfaces
//! in the demo only log what the platform collaborators would do.

use anyhow::Result;
use clap::Parser;
use iced::Application;
use tubetile::gui::{PreviewApp, PreviewFlags};
use tubetile::resolver;

#[derive(Parser)]
struct Args {
    /// YouTube URL (watch/share/embed forms) or anything containing a video id
    video_url: String,

    /// Skip stream resolution and always use the embedded web player
    #[arg(long)]
    no_resolver: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    if !args.no_resolver {
        check_ytdlp_installed();
    }

    PreviewApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(560.0, 360.0),
            min_size: Some(iced::Size::new(480.0, 300.0)),
            ..Default::default()
        },
        antialiasing: true,
        flags: PreviewFlags {
            video_url: args.video_url,
            no_resolver: args.no_resolver,
        },
        ..Default::default()
    })?;

    Ok(())
}

fn check_ytdlp_installed() {
    if resolver::ytdlp::find_ytdlp().is_some() {
        return;
    }

    // Not fatal: the widget degrades to the embedded player.
    eprintln!("WARNING: yt-dlp not found");
    eprintln!("The demo will run, but every video will use the embed fallback.");
    eprintln!("Install yt-dlp with: pip install yt-dlp (or: brew install yt-dlp)");
}
