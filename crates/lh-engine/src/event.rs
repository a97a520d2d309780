//! Typed inputs to and outputs from a [`Session`](crate::Session).

use lh_core::{ContentSelection, StatusKey, UiLanguage};

use crate::geometry::{Point, Viewport};
use crate::haptics::HapticPattern;
use crate::navigation::{ObserverId, Visibility};

/// Something the host observed.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A press began inside the orb.
    PointerDown(Point),
    /// The pointer moved.
    PointerMove(Point),
    /// The press ended.
    PointerUp,
    /// The platform cancelled the press; treated like a release.
    PointerCancel,
    /// The drawable area changed size.
    Resize(Viewport),
    /// The page visibility changed.
    Visibility(Visibility),
    /// The user dismissed the result ("pull new verse").
    Dismiss,
    /// The user asked to read the current selection.
    Open,
    /// Show the settings panel.
    OpenSettings,
    /// Close the settings panel without saving.
    CloseSettings,
    /// Persist and apply edited settings.
    SaveSettings {
        /// Chosen UI language.
        ui_language: UiLanguage,
        /// Chosen content selection.
        content: ContentSelection,
    },
}

/// Something the host should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Replace the status line.
    SetStatus(StatusKey),
    /// Move the orb relative to its resting position.
    SetOrbOffset {
        /// Horizontal offset.
        x: f32,
        /// Vertical offset.
        y: f32,
    },
    /// Toggle the orb's active look.
    SetActive(bool),
    /// Play a haptic pattern.
    Vibrate(HapticPattern),
    /// Reveal the result overlay.
    ShowResult {
        /// Localized book name.
        book_name: String,
        /// `chapter:verse`.
        reference: String,
    },
    /// Hide the result overlay.
    HideResult,
    /// Start reporting visibility changes for an observer.
    WatchVisibility(ObserverId),
    /// Stop reporting visibility changes for an observer.
    UnwatchVisibility(ObserverId),
    /// Navigate the current context to a URI.
    Navigate(String),
    /// Open a URL in a new browsing context.
    OpenExternal(String),
    /// Show the settings panel.
    ShowSettings,
    /// Hide the settings panel.
    HideSettings,
    /// Relabel the UI in a language.
    ApplyLanguage(UiLanguage),
}

/// What a scheduled timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// One haptic pulse while holding.
    HapticPulse,
    /// The "hold longer" hint expires.
    HintExpired,
    /// Reveal the result after a qualifying release.
    Reveal,
    /// The native link went unanswered.
    NavigationFallback,
}
