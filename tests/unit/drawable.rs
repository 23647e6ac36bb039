use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::render::recording::{DrawOp, RecordingSurface};

fn bar() -> Rect {
    Rect::new(0.0, 0.0, 500.0, 48.0)
}

fn counter(p: &mut SquigglyProgress) -> Rc<Cell<usize>> {
    let hits = Rc::new(Cell::new(0));
    let h = Rc::clone(&hits);
    p.set_invalidate_callback(move || h.set(h.get() + 1));
    hits
}

#[test]
fn static_wave_settles_idle() {
    let mut p = SquigglyProgress::default();
    let mut s = RecordingSurface::new();
    assert_eq!(p.draw(&mut s, bar(), Timestamp(0)), FrameRequest::Idle);
    assert_eq!(p.phase_offset(), 0.0);
    assert!(s.is_balanced());
}

#[test]
fn animating_advances_phase_and_requests_frames() {
    let mut p = SquigglyProgress::default();
    let hits = counter(&mut p);
    p.set_animate(true);
    let after_toggle = hits.get();
    assert!(after_toggle >= 1);

    let mut s = RecordingSurface::new();
    assert!(p.draw(&mut s, bar(), Timestamp(1_000)).needs_more());
    assert_eq!(p.phase_offset(), 0.0);
    assert!(p.draw(&mut s, bar(), Timestamp(1_500)).needs_more());
    assert!((p.phase_offset() - 8.0).abs() < 1e-9);
    assert_eq!(hits.get(), after_toggle + 2);
}

#[test]
fn stopping_freezes_phase_and_flattens() {
    let mut p = SquigglyProgress::default();
    p.set_animate(true);
    let mut s = RecordingSurface::new();
    p.draw(&mut s, bar(), Timestamp(0));
    p.draw(&mut s, bar(), Timestamp(1_000));
    let frozen = p.phase_offset();

    p.set_animate(false);
    let mut now = 1_000;
    let mut frames = 0;
    while p.draw(&mut s, bar(), Timestamp(now)).needs_more() {
        now += 16;
        frames += 1;
        assert!(frames < 1_000);
    }
    assert_eq!(p.phase_offset(), frozen);
    assert_eq!(p.height_fraction(), 0.0);
    assert_eq!(p.height_state(), HeightState::Idle(0.0));

    // Fully flattened: every point of the wave sits on the center line.
    for el in p.path().elements() {
        if let Some(end) = el.end_point() {
            assert_eq!(end.y, 0.0);
        }
    }
}

#[test]
fn restart_grows_wave_back_in() {
    let mut p = SquigglyProgress::default();
    let mut s = RecordingSurface::new();
    p.set_animate(true);
    p.set_animate(false);
    p.draw(&mut s, bar(), Timestamp(0));
    p.draw(&mut s, bar(), Timestamp(200));
    let partway = p.height_fraction();
    assert!(partway < 1.0);

    p.set_animate(true);
    assert_eq!(
        p.height_state(),
        HeightState::Animating {
            from: partway,
            to: 1.0
        }
    );
    let mut now = 200;
    while p.height_state() != HeightState::Idle(1.0) {
        now += 16;
        p.draw(&mut s, bar(), Timestamp(now));
        assert!((0.0..=1.0).contains(&p.height_fraction()));
        assert!(now < 10_000);
    }
    assert!(p.draw(&mut s, bar(), Timestamp(now + 16)).needs_more());
}

#[test]
fn first_frame_after_toggle_does_not_jump_tween() {
    let mut p = SquigglyProgress::default();
    let mut s = RecordingSurface::new();
    p.draw(&mut s, bar(), Timestamp(0));
    p.set_animate(true);
    p.set_animate(false);
    // A long idle gap before the first frame must not complete the tween instantly.
    p.draw(&mut s, bar(), Timestamp(60_000));
    assert!(p.height_fraction() > 0.99);
}

#[test]
fn level_setters_clamp_and_normalize() {
    let mut p = SquigglyProgress::default();
    let hits = counter(&mut p);

    p.set_level(0.25);
    assert_eq!(p.level(), 0.25);
    p.set_level(3.0);
    assert_eq!(p.level(), 1.0);
    p.set_level(-1.0);
    assert_eq!(p.level(), 0.0);
    p.set_level(f64::NAN);
    assert_eq!(p.level(), 0.0);
    p.set_level_fixed(5_000);
    assert_eq!(p.level(), 0.5);
    p.set_level_fixed(20_000);
    assert_eq!(p.level(), 1.0);

    let before = hits.get();
    p.set_level(1.0);
    assert_eq!(hits.get(), before, "unchanged level should not invalidate");
}

#[test]
fn parameter_setters_clamp() {
    let mut p = SquigglyProgress::default();
    p.set_wave_length(-10.0);
    assert_eq!(p.params().wave_length, 0.0);
    p.set_wave_length(f64::NAN);
    assert_eq!(p.params().wave_length, 0.0);
    p.set_line_amplitude(-2.0);
    assert_eq!(p.params().line_amplitude, 0.0);
    p.set_stroke_width(f64::INFINITY);
    assert_eq!(p.params().stroke_width, 4.0);
    p.set_stroke_width(-1.0);
    assert_eq!(p.params().stroke_width, 0.0);
    p.set_phase_speed(f64::NAN);
    assert_eq!(p.params().phase_speed, 16.0);

    // A zero wave length still draws, as a flat line.
    let mut s = RecordingSurface::new();
    p.draw(&mut s, bar(), Timestamp(0));
    assert_eq!(p.path().elements().len(), 2);
    assert!(s.is_balanced());
}

#[test]
fn shrinking_wave_length_keeps_phase_in_range() {
    let mut p = SquigglyProgress::default();
    p.set_animate(true);
    let mut s = RecordingSurface::new();
    p.draw(&mut s, bar(), Timestamp(0));
    p.draw(&mut s, bar(), Timestamp(3_000));
    assert!((p.phase_offset() - 48.0).abs() < 1e-9);
    p.set_wave_length(20.0);
    assert!((0.0..20.0).contains(&p.phase_offset()));
}

#[test]
fn stroke_width_reaches_both_paints() {
    let mut p = SquigglyProgress::default();
    p.set_stroke_width(7.0);
    p.set_level(0.5);
    let mut s = RecordingSurface::new();
    p.draw(&mut s, bar(), Timestamp(0));
    for d in s.draws() {
        let paint = match &d.op {
            DrawOp::StrokePath { paint, .. } => paint,
            DrawOp::Line { paint, .. } => paint,
            DrawOp::Point { paint, .. } => paint,
        };
        assert_eq!(paint.width, 7.0);
    }
}

#[test]
fn tint_and_alpha_update_colors_together() {
    let mut p = SquigglyProgress::default();
    let c = Rgba8::new(0x67, 0x50, 0xa4, 0xff);
    p.set_tint(Some(c));
    assert_eq!(p.colors().active(), c);
    assert_eq!(p.colors().inactive(), c.with_alpha(77));

    p.set_alpha(128);
    assert_eq!(p.alpha(), 128);
    assert_eq!(p.colors().active(), c.with_alpha(128));
    assert_eq!(p.colors().inactive(), c.with_alpha(38));

    p.set_tint(None);
    assert_eq!(p.colors().active(), c.with_alpha(128));

    p.set_opacity(1.0);
    assert_eq!(p.alpha(), 255);
}

#[test]
fn from_config_applies_every_field() {
    let cfg = ProgressConfig {
        wave_length: 40.0,
        transition_enabled: false,
        animate: true,
        alpha: 100,
        level: 0.3,
        ..ProgressConfig::default()
    };
    let p = SquigglyProgress::from_config(&cfg);
    assert_eq!(p.params().wave_length, 40.0);
    assert!(!p.transition_enabled());
    assert!(p.animate());
    assert_eq!(p.alpha(), 100);
    assert_eq!(p.level(), 0.3);
    assert_eq!(p.height_fraction(), 1.0);
}

#[test]
fn draws_through_dyn_surface() {
    let mut p = SquigglyProgress::default();
    p.set_level(0.4);
    let mut s = RecordingSurface::new();
    let surface: &mut dyn DrawSurface = &mut s;
    p.draw(surface, bar(), Timestamp(0));
    assert_eq!(s.draws().len(), 3);
    assert!(!format!("{p:?}").is_empty());
}

#[test]
fn recording_surface_reused_across_frames() {
    let mut p = SquigglyProgress::default();
    p.set_level(0.5);
    p.set_animate(true);
    let mut s = RecordingSurface::new();

    p.draw(&mut s, bar(), Timestamp(0));
    p.draw(&mut s, bar(), Timestamp(500));
    assert_eq!(s.draws().len(), 6);

    let last = s.take_draws();
    assert!(s.draws().is_empty());
    assert_eq!(s.depth(), 0);
    p.draw(&mut s, bar(), Timestamp(1_000));
    let next = s.take_draws();
    assert_eq!(next.len(), 3);
    // The phase moved, so the wave path differs between frames.
    assert_ne!(last[3].op, next[0].op);
}

#[test]
fn cleared_callback_stops_firing() {
    let mut p = SquigglyProgress::default();
    let hits = counter(&mut p);
    p.set_level(0.2);
    let seen = hits.get();
    assert!(seen >= 1);

    p.clear_invalidate_callback();
    p.set_level(0.8);
    p.set_animate(true);
    let mut s = RecordingSurface::new();
    assert!(p.draw(&mut s, bar(), Timestamp(0)).needs_more());
    assert_eq!(hits.get(), seen);
}

#[test]
fn new_bar_shows_full_wave_while_stopped() {
    let mut p = SquigglyProgress::default();
    assert!(!p.animate());
    assert_eq!(p.height_state(), HeightState::Idle(1.0));

    // Stopping from the running state flattens instead of returning to the initial height.
    p.set_animate(true);
    p.set_animate(false);
    let mut s = RecordingSurface::new();
    let mut now = 0;
    while p.draw(&mut s, bar(), Timestamp(now)).needs_more() {
        now += 16;
    }
    assert_eq!(p.height_state(), HeightState::Idle(0.0));
}
