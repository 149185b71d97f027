//! Quiz window: category buttons, one question at a time, then results
//! with a score ring and per-question review.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::quiz::{QuizCategory, QuizPhase, QuizResults, QuizSession, RING_RADIUS};

use super::colors;

const WINDOW_WIDTH: f32 = 420.0;
const RING_STROKE: f32 = 10.0;
const RING_SEGMENTS: usize = 96;

/// Quiz window visibility and session state.
#[derive(Resource, Default, Debug)]
pub struct QuizWindow {
    pub open: bool,
    pub session: QuizSession,
}

/// Points along the filled part of the score ring, clockwise from the top.
///
/// The arc covers the circumference minus the dash offset, matching the
/// dashed-stroke ring of the results screen.
pub fn ring_arc(center: egui::Pos2, results: &QuizResults) -> Vec<egui::Pos2> {
    let filled = 1.0 - results.ring_dash_offset() / QuizResults::ring_circumference();
    if filled <= 0.0 {
        return Vec::new();
    }
    let steps = ((RING_SEGMENTS as f32 * filled).ceil() as usize).max(1);
    (0..=steps)
        .map(|i| {
            let angle = -FRAC_PI_2 + TAU * filled * i as f32 / steps as f32;
            center + RING_RADIUS * egui::vec2(angle.cos(), angle.sin())
        })
        .collect()
}

pub fn quiz_panel(mut contexts: EguiContexts, mut quiz: ResMut<QuizWindow>) {
    if !quiz.open {
        return;
    }
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    let mut open = quiz.open;
    egui::Window::new("Space Quiz")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .fixed_size(egui::vec2(WINDOW_WIDTH, 0.0))
        .show(ctx, |ui| match quiz.session.phase() {
            QuizPhase::CategorySelection => category_screen(ui, &mut quiz.session),
            QuizPhase::Question => question_screen(ui, &mut quiz.session),
            QuizPhase::Results => results_screen(ui, &mut quiz.session),
        });
    quiz.open = open;
}

fn category_screen(ui: &mut egui::Ui, session: &mut QuizSession) {
    ui.label(egui::RichText::new("Choose a category").size(16.0).strong());
    ui.add_space(8.0);
    for category in QuizCategory::ALL {
        let button = egui::Button::new(category.label())
            .min_size(egui::vec2(WINDOW_WIDTH - 20.0, 32.0));
        if ui.add(button).clicked() {
            info!("Quiz started: {}", category.label());
            session.start(category);
        }
    }
}

fn question_screen(ui: &mut egui::Ui, session: &mut QuizSession) {
    let Some(question) = session.current_question() else {
        return;
    };
    let total = session
        .category()
        .map(|c| c.questions().len())
        .unwrap_or_default();

    ui.add(egui::ProgressBar::new(session.progress()).text(format!(
        "Question {} of {}",
        session.current_index() + 1,
        total
    )));
    ui.add_space(8.0);
    ui.label(egui::RichText::new(question.question).size(16.0).color(colors::TEXT));
    ui.add_space(8.0);

    let selected = session.selected_option();
    for (index, option) in question.options.iter().enumerate() {
        let button = egui::Button::new(*option)
            .selected(selected == Some(index))
            .min_size(egui::vec2(WINDOW_WIDTH - 20.0, 28.0));
        if ui.add(button).clicked()
            && let Err(err) = session.select_option(index)
        {
            warn!("Quiz answer rejected: {err}");
        }
    }

    ui.add_space(8.0);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui
            .add_enabled(session.can_advance(), egui::Button::new("Next"))
            .clicked()
            && let Err(err) = session.next()
        {
            warn!("Quiz could not advance: {err}");
        }
    });
}

fn results_screen(ui: &mut egui::Ui, session: &mut QuizSession) {
    let results = match session.results() {
        Ok(results) => results,
        Err(err) => {
            warn!("Quiz results unavailable: {err}");
            return;
        }
    };

    ui.vertical_centered(|ui| {
        let side = (RING_RADIUS + RING_STROKE) * 2.0;
        let size = egui::vec2(side, side);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        painter.circle_stroke(
            center,
            RING_RADIUS,
            egui::Stroke::new(RING_STROKE, colors::PANEL_BORDER),
        );
        painter.add(egui::Shape::line(
            ring_arc(center, &results),
            egui::Stroke::new(RING_STROKE, colors::SUCCESS),
        ));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            results.percentage_label(),
            egui::FontId::proportional(22.0),
            egui::Color32::WHITE,
        );
        ui.add_space(6.0);
        ui.label(egui::RichText::new(results.summary()).strong());
    });

    ui.separator();
    egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
        for review in &results.reviews {
            let (mark, color) = if review.correct {
                ("\u{2714}", colors::SUCCESS)
            } else {
                ("\u{2718}", colors::DANGER)
            };
            ui.label(
                egui::RichText::new(format!("{mark} Question {}", review.number))
                    .strong()
                    .color(color),
            );
            ui.label(format!(
                "Your answer: {}",
                review.your_answer.unwrap_or("(none)")
            ));
            ui.label(format!("Correct answer: {}", review.correct_answer));
            ui.label(egui::RichText::new(review.reason).color(colors::MUTED));
            ui.add_space(6.0);
        }
    });

    ui.add_space(6.0);
    if ui.button("Restart").clicked() {
        session.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(score: usize, total: usize) -> QuizResults {
        QuizResults {
            score,
            total,
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_empty_score_draws_no_arc() {
        assert!(ring_arc(egui::pos2(0.0, 0.0), &results(0, 5)).is_empty());
    }

    #[test]
    fn test_full_score_closes_ring() {
        let center = egui::pos2(100.0, 100.0);
        let arc = ring_arc(center, &results(5, 5));
        let first = arc[0];
        let last = arc[arc.len() - 1];
        assert!((first - last).length() < 1e-3);
        assert!((first - egui::pos2(100.0, 100.0 - RING_RADIUS)).length() < 1e-3);
        for point in &arc {
            assert!(((*point - center).length() - RING_RADIUS).abs() < 1e-3);
        }
    }

    #[test]
    fn test_partial_score_ends_on_ring() {
        let center = egui::pos2(0.0, 0.0);
        // 3/5: arc ends at 60% of the way round, clockwise on screen.
        let arc = ring_arc(center, &results(3, 5));
        let end = arc[arc.len() - 1];
        let angle = -FRAC_PI_2 + TAU * 0.6;
        let expected = egui::pos2(RING_RADIUS * angle.cos(), RING_RADIUS * angle.sin());
        assert!((end - expected).length() < 1e-2);
    }
}
