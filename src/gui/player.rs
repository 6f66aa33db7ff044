//! The preview/playback widget
//!
//! Two-phase component in the usual update/view shape: the placeholder phase
//! renders the video thumbnail behind a play affordance; tapping it activates
//! the state machine, fires the single resolution command and hands the
//! result to the playback host. All mutation happens in `update` on the UI
//! task — `Command::perform` is the hop back from the resolver future.

use crate::gui::theme;
use crate::player::{Phase, PlayerState, Source};
use crate::resolver::{resolve_source, StreamResolver};
use crate::surface::{FullscreenEvent, PlaybackHost};
use crate::video::VideoId;
use iced::widget::{button, column, container, image, text, Image};
use iced::{Alignment, Command, Element, Length};
use std::sync::Arc;
use tracing::debug;

/// Messages produced and consumed by a [`PreviewPlayer`].
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    /// Thumbnail bytes arrived (or the fetch failed and the placeholder
    /// stays blank — no error shown).
    ThumbnailFetched(Option<Vec<u8>>),
    /// The user tapped the play affordance.
    PlayPressed,
    /// The one resolution callback.
    SourceResolved(Source),
    /// Full-screen transition notification from the native player.
    Fullscreen(FullscreenEvent),
}

pub struct PreviewPlayer {
    video_id: VideoId,
    thumbnail_url: String,
    thumbnail: Option<image::Handle>,
    state: PlayerState,
    resolver: Arc<dyn StreamResolver>,
    host: PlaybackHost,
}

impl PreviewPlayer {
    /// Build a widget from a YouTube URL. An unextractable URL degrades to an
    /// empty identifier (broken thumbnail, embed fallback) rather than an
    /// error.
    pub fn from_url(
        video_url: &str,
        resolver: Arc<dyn StreamResolver>,
        host: PlaybackHost,
    ) -> (Self, Command<PlayerEvent>) {
        let video_id = VideoId::extract_or_empty(video_url);
        let thumbnail_url = video_id.thumbnail_url();
        Self::new(video_id, thumbnail_url, resolver, host)
    }

    /// Build a widget from an explicit identifier and thumbnail URL.
    pub fn new(
        video_id: VideoId,
        thumbnail_url: String,
        resolver: Arc<dyn StreamResolver>,
        host: PlaybackHost,
    ) -> (Self, Command<PlayerEvent>) {
        let fetch = Command::perform(
            fetch_thumbnail(thumbnail_url.clone()),
            PlayerEvent::ThumbnailFetched,
        );

        let player = Self {
            video_id,
            thumbnail_url,
            thumbnail: None,
            state: PlayerState::new(),
            resolver,
            host,
        };

        (player, fetch)
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn is_surface_mounted(&self) -> bool {
        self.host.is_mounted()
    }

    pub fn update(&mut self, event: PlayerEvent) -> Command<PlayerEvent> {
        match event {
            PlayerEvent::ThumbnailFetched(Some(bytes)) => {
                self.thumbnail = Some(image::Handle::from_memory(bytes));
                Command::none()
            }
            PlayerEvent::ThumbnailFetched(None) => {
                debug!("thumbnail unavailable for {}", self.video_id);
                Command::none()
            }
            PlayerEvent::PlayPressed => {
                if self.state.activate() {
                    let resolver = Arc::clone(&self.resolver);
                    let video_id = self.video_id.clone();
                    Command::perform(
                        resolve_source(resolver, video_id),
                        PlayerEvent::SourceResolved,
                    )
                } else {
                    // Already active; nothing to do.
                    Command::none()
                }
            }
            PlayerEvent::SourceResolved(source) => {
                if self.state.apply_resolution(source) {
                    self.host.mount(&self.video_id, self.state.source());
                }
                Command::none()
            }
            PlayerEvent::Fullscreen(event) => {
                self.host.fullscreen_event(event);
                Command::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, PlayerEvent> {
        let content: Element<'_, PlayerEvent> = match self.state.phase() {
            Phase::Placeholder => self.placeholder_view(),
            Phase::Active { source } => self.active_view(source.as_ref()),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                theme::PlayerContainer,
            )))
            .into()
    }

    fn placeholder_view(&self) -> Element<'_, PlayerEvent> {
        let mut placeholder = column![].align_items(Alignment::Center).spacing(12);

        if let Some(handle) = &self.thumbnail {
            placeholder = placeholder.push(
                Image::new(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }

        placeholder = placeholder.push(
            button(text("\u{25B6}  Play").size(18))
                .on_press(PlayerEvent::PlayPressed)
                .padding([10, 24])
                .style(iced::theme::Button::Custom(Box::new(theme::PlayButton))),
        );

        container(placeholder)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into()
    }

    /// The active phase: the real playback surface is a platform overlay
    /// owned by the host's collaborators, so the widget region shows the
    /// surface status.
    fn active_view(&self, source: Option<&Source>) -> Element<'_, PlayerEvent> {
        let status = match source {
            None => text("Loading player...").style(theme::TEXT_SECONDARY),
            Some(Source::Stream(_)) => text("Playing (native stream)"),
            Some(Source::Embed) => text("Playing (embedded player)"),
        };

        container(status)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into()
    }
}

/// Fetch the thumbnail bytes; any failure becomes `None` (blank placeholder).
async fn fetch_thumbnail(url: String) -> Option<Vec<u8>> {
    let response = reqwest::get(&url).await.ok()?;
    if !response.status().is_success() {
        debug!("thumbnail fetch returned {}", response.status());
        return None;
    }
    let bytes = response.bytes().await.ok()?;
    Some(bytes.to_vec())
}
