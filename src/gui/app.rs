//! Demo application hosting a single preview widget

use crate::gui::player::{PlayerEvent, PreviewPlayer};
use crate::resolver::{NoStreamResolver, StreamResolver, YtDlpResolver};
use crate::surface::{LoggingVideoSurface, LoggingWebSurface, PlaybackHost};
use iced::widget::container;
use iced::{Application, Command, Element, Length, Theme};
use std::sync::Arc;
use tracing::warn;

/// Startup parameters from the CLI.
#[derive(Debug, Clone, Default)]
pub struct PreviewFlags {
    pub video_url: String,
    /// Skip yt-dlp and force the embed fallback path.
    pub no_resolver: bool,
}

pub struct PreviewApp {
    player: PreviewPlayer,
}

#[derive(Debug, Clone)]
pub enum Message {
    Player(PlayerEvent),
}

impl Application for PreviewApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = PreviewFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let resolver: Arc<dyn StreamResolver> = if flags.no_resolver {
            Arc::new(NoStreamResolver)
        } else {
            match YtDlpResolver::new() {
                Ok(resolver) => Arc::new(resolver),
                Err(e) => {
                    warn!("Stream resolution disabled: {}", e);
                    Arc::new(NoStreamResolver)
                }
            }
        };

        let host = PlaybackHost::new(
            Box::new(LoggingVideoSurface),
            Box::new(LoggingWebSurface),
        );

        let (player, command) = PreviewPlayer::from_url(&flags.video_url, resolver, host);

        (Self { player }, command.map(Message::Player))
    }

    fn title(&self) -> String {
        format!("tubetile - {}", self.player.video_id())
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Player(event) => self.player.update(event).map(Message::Player),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        // A fixed 16:9 tile, the way an embedding app would size the region.
        container(
            container(self.player.view().map(Message::Player))
                .width(Length::Fixed(480.0))
                .height(Length::Fixed(270.0)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }
}
