//! The main screen: particle field, orb, status line and result card.

use lh_core::{Label, strings};
use lh_engine::{Event, Point};
use macroquad::prelude::*;

use super::{Screen, ScreenId, Transition};
use crate::app::AppState;
use crate::input::PointerTracker;
use crate::theme::{
    HEADING_SIZE, ORB_PULSE, ORB_RADIUS, ROW_H, TEXT_SIZE, draw_centered_text, palette,
    with_alpha,
};
use crate::widget::Rect2;
use crate::widget::button::{draw_button, left_click};

/// The orb screen.
#[derive(Debug, Default)]
pub struct OrbScreen {
    pointer: PointerTracker,
}

impl OrbScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self::default()
    }
}

fn orb_center(app: &AppState) -> Point {
    let c = app.session.field().viewport().center();
    Point::new(c.x + app.view.orb_offset.x, c.y + app.view.orb_offset.y)
}

fn settings_button() -> Rect2 {
    Rect2::new(screen_width() - 52.0, 12.0, 40.0, 40.0)
}

fn card_area() -> Rect2 {
    let w = 320.0_f32.min(screen_width() - 24.0);
    Rect2::centered(screen_width() / 2.0, screen_height() / 2.0, w, 220.0)
}

/// Three bars, drawn rather than typed: the default font has no gear glyph.
fn draw_menu_icon(area: &Rect2, mouse: (f32, f32)) {
    draw_button("", area, mouse);
    for i in 0..3 {
        let y = area.y + 12.0 + i as f32 * 8.0;
        draw_rectangle(area.x + 10.0, y, area.w - 20.0, 2.0, palette::TEXT);
    }
}

fn card_buttons(card: &Rect2) -> (Rect2, Rect2) {
    let row = Rect2::new(card.x + 16.0, card.y + card.h - ROW_H - 16.0, card.w - 32.0, ROW_H);
    let (read, reset) = row.split_h(0.5);
    (read.inset(4.0), reset.inset(4.0))
}

impl Screen for OrbScreen {
    fn update(&mut self, app: &mut AppState) -> Transition {
        let mouse = mouse_position();
        let clicked = left_click();

        if app.view.result.is_some() {
            let (read, reset) = card_buttons(&card_area());
            if clicked && read.contains(mouse.0, mouse.1) {
                app.dispatch(Event::Open);
            } else if clicked && reset.contains(mouse.0, mouse.1) {
                app.dispatch(Event::Dismiss);
            }
            return Transition::None;
        }

        if clicked && settings_button().contains(mouse.0, mouse.1) {
            app.dispatch(Event::OpenSettings);
            return if app.view.settings_visible {
                Transition::Push(ScreenId::Settings)
            } else {
                Transition::None
            };
        }

        let center = orb_center(app);
        let hit = ORB_RADIUS + ORB_PULSE;
        for event in self.pointer.poll(|p| p.distance_to(center) <= hit) {
            app.dispatch(event);
        }
        Transition::None
    }

    fn draw(&self, app: &AppState) {
        let lang = app.view.language;
        for p in app.session.field().particles() {
            draw_circle(p.x, p.y, p.radius, with_alpha(palette::GOLD, p.opacity));
        }

        let center = orb_center(app);
        let t = get_time() as f32;
        let pulse = if app.view.active {
            ORB_PULSE * (t * 9.0).sin().abs()
        } else {
            ORB_PULSE * 0.3 * (t * 1.5).sin()
        };
        let radius = ORB_RADIUS + pulse;
        for ring in (1..=4).rev() {
            let r = radius + ring as f32 * 10.0;
            draw_circle(center.x, center.y, r, with_alpha(palette::EMBER, 0.05));
        }
        draw_circle(center.x, center.y, radius, with_alpha(palette::GOLD, 0.85));
        draw_circle(center.x, center.y, radius * 0.55, palette::TEXT);

        let w = screen_width();
        draw_centered_text(
            strings::label_text(lang, Label::AppTitle),
            w / 2.0,
            64.0,
            HEADING_SIZE,
            palette::TEXT,
        );
        draw_centered_text(
            strings::status_text(lang, app.view.status),
            w / 2.0,
            screen_height() / 2.0 + ORB_RADIUS + 72.0,
            TEXT_SIZE,
            palette::MUTED,
        );

        let mouse = mouse_position();
        draw_menu_icon(&settings_button(), mouse);

        if let Some(card) = &app.view.result {
            draw_rectangle(0.0, 0.0, w, screen_height(), palette::VEIL);
            let area = card_area();
            crate::widget::bordered_rect(&area, palette::PANEL, palette::GOLD);
            draw_centered_text(
                &card.book_name,
                area.x + area.w / 2.0,
                area.y + 64.0,
                HEADING_SIZE,
                palette::GOLD,
            );
            draw_centered_text(
                &card.reference,
                area.x + area.w / 2.0,
                area.y + 110.0,
                HEADING_SIZE,
                palette::TEXT,
            );
            let (read, reset) = card_buttons(&area);
            draw_button(strings::label_text(lang, Label::Read), &read, mouse);
            draw_button(strings::label_text(lang, Label::Reset), &reset, mouse);
        }
    }
}
