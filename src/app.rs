use eframe::CreationContext;
use eframe::egui::{self, Align2, RichText};

use crate::access;
use crate::content::{AccordionEntry, Card, Resume, Section, SectionBody};
use crate::form;
use crate::settings::{self, AppSettings};
use crate::state::{AppState, Notice};
use crate::theme::{self, Palette};

/// Window width below which the navbar collapses into a menu button.
const COMPACT_BREAKPOINT: f32 = 720.0;
const REVEAL_SECONDS: f32 = 0.6;
const REVEAL_RISE: f32 = 30.0;
const SECTION_GAP: f32 = 18.0;

pub struct CvApp {
    resume: Resume,
    nav_entries: Vec<(String, String)>,
    settings: AppSettings,
    state: AppState,
    scroll_offset: f32,
    /// Furthest offset the page can scroll to, from the previous frame.
    scroll_max: f32,
}

impl CvApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let settings = settings::load();
        let state = AppState::from_settings(&settings);
        // Persist the resolved preference right away so a first run records
        // the dark default.
        if let Err(err) = settings::save(&settings) {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
        theme::apply(&cc.egui_ctx, state.theme());
        tracing::info!(theme = state.theme().label(), "cv viewer starting");
        let resume = Resume::sample();
        let nav_entries = resume
            .sections
            .iter()
            .map(|section| (section.id.clone(), section.title.clone()))
            .collect();
        Self {
            resume,
            nav_entries,
            settings,
            state,
            scroll_offset: 0.0,
            scroll_max: 0.0,
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let palette = self.state.theme().palette();
        self.navbar(ctx, palette);
        self.footer(ctx, palette);
        self.page(ctx, palette);
        self.notice(ctx);
    }

    fn navbar(&mut self, ctx: &egui::Context, palette: &'static Palette) {
        let compact = ctx.screen_rect().width() < COMPACT_BREAKPOINT;
        let frame = egui::Frame::none()
            .fill(palette.panel_fill)
            .inner_margin(egui::Margin::symmetric(12.0, 8.0));
        egui::TopBottomPanel::top("navbar").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = ui.add(
                    egui::Button::new(
                        RichText::new(&self.resume.name)
                            .strong()
                            .size(18.0)
                            .color(palette.panel_text),
                    )
                    .frame(false),
                );
                if brand.clicked() {
                    self.state.scroll.request(0.0);
                    self.state.nav_open = false;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let toggle = ui
                        .add(
                            egui::Button::new(
                                RichText::new(self.state.theme().toggle_glyph())
                                    .size(16.0)
                                    .color(palette.panel_text),
                            )
                            .frame(false),
                        )
                        .on_hover_text("Toggle dark mode");
                    if toggle.clicked() {
                        self.toggle_theme(ui.ctx());
                    }

                    if compact {
                        let menu = ui.add(
                            egui::Button::new(RichText::new("☰").color(palette.panel_text))
                                .frame(false),
                        );
                        if menu.clicked() {
                            self.state.nav_open = !self.state.nav_open;
                        }
                    } else {
                        let mut clicked = None;
                        for (id, title) in &self.nav_entries {
                            let link = ui.add(
                                egui::Button::new(
                                    RichText::new(title).color(palette.panel_text),
                                )
                                .frame(false),
                            );
                            if link.clicked() {
                                clicked = Some(id.clone());
                            }
                        }
                        if let Some(id) = clicked {
                            self.state.navigate_to(&id);
                        }
                    }
                });
            });

            if compact && self.state.nav_open {
                ui.separator();
                let mut clicked = None;
                for (id, title) in &self.nav_entries {
                    let link = ui.add(
                        egui::Button::new(RichText::new(title).color(palette.panel_text))
                            .frame(false),
                    );
                    if link.clicked() {
                        clicked = Some(id.clone());
                    }
                }
                if let Some(id) = clicked {
                    self.state.navigate_to(&id);
                }
            }
        });
    }

    fn footer(&self, ctx: &egui::Context, palette: &'static Palette) {
        let frame = egui::Frame::none()
            .fill(palette.panel_fill)
            .inner_margin(egui::Margin::symmetric(12.0, 6.0));
        egui::TopBottomPanel::bottom("footer").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("© 2026 {}", self.resume.name))
                        .small()
                        .color(palette.panel_text),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.hyperlink_to(
                        RichText::new("Email").small().color(palette.panel_text),
                        format!("mailto:{}", self.resume.contact_email),
                    );
                });
            });
        });
    }

    fn page(&mut self, ctx: &egui::Context, palette: &'static Palette) {
        let frame = egui::Frame::none()
            .fill(palette.page_fill)
            .inner_margin(egui::Margin::symmetric(24.0, 16.0));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let dt = ui.input(|i| i.stable_dt).min(0.1);
            if self.state.scroll.is_active() && ui.input(|i| i.raw_scroll_delta.y != 0.0) {
                // The user took over; stop easing.
                self.state.scroll.cancel();
            }
            let mut area = egui::ScrollArea::vertical()
                .id_source("page")
                .auto_shrink([false, false]);
            if let Some(offset) = self.state.scroll.tick(self.scroll_offset, self.scroll_max, dt)
            {
                area = area.vertical_scroll_offset(offset);
                ui.ctx().request_repaint();
            }
            let output = area.show(ui, |ui| {
                self.page_contents(ui, palette);
            });
            self.scroll_offset = output.state.offset.y;
            self.scroll_max = (output.content_size.y - output.inner_rect.height()).max(0.0);
            // The render pass records screen-space tops; convert them to
            // content space so navigation targets survive scrolling.
            let origin = output.inner_rect.top() - output.state.offset.y;
            for top in self.state.section_tops.values_mut() {
                *top -= origin;
            }
        });
    }

    fn page_contents(&mut self, ui: &mut egui::Ui, palette: &'static Palette) {
        let viewport = ui.clip_rect();
        ui.add_space(8.0);
        ui.label(
            RichText::new(&self.resume.name)
                .size(32.0)
                .strong()
                .color(palette.heading),
        );
        // Decorative tagline; its color is shared by both palettes.
        ui.label(
            RichText::new(&self.resume.tagline)
                .size(18.0)
                .italics()
                .color(theme::HANDWRITING),
        );
        self.state.section_tops.clear();
        for section in &self.resume.sections {
            let top = render_section(
                ui,
                section,
                &mut self.state,
                palette,
                viewport,
                &self.resume.contact_email,
            );
            self.state.section_tops.insert(section.id.clone(), top);
        }
        ui.add_space(24.0);
    }

    fn notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.state.notice.clone() else {
            return;
        };
        let (title, text) = match &notice {
            Notice::Error(text) => ("Cannot send", text.clone()),
            Notice::Info(text) => ("Message", text.clone()),
        };
        // The notice is the alert analog: nothing behind it may react until
        // it is dismissed. The backdrop eats pointer input aimed at the page;
        // the window is laid out after it, so it stays on top.
        blocking_backdrop(ctx);
        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(text);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.state.notice = None;
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        let mode = self.state.theme().toggled();
        self.state.set_theme(mode);
        theme::apply(ctx, mode);
        self.state.apply_to_settings(&mut self.settings);
        if let Err(err) = settings::save(&self.settings) {
            // Storage failure degrades persistence, not the toggle itself.
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
        tracing::debug!(theme = mode.label(), "theme toggled");
    }
}

/// Full-screen click-swallowing layer drawn under a pending notice.
fn blocking_backdrop(ctx: &egui::Context) {
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("notice_backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_response(screen.size(), egui::Sense::click());
            ui.painter()
                .rect_filled(response.rect, 0.0, egui::Color32::from_black_alpha(96));
        });
}

impl eframe::App for CvApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

fn render_section(
    ui: &mut egui::Ui,
    section: &Section,
    state: &mut AppState,
    palette: &'static Palette,
    viewport: egui::Rect,
    contact_email: &str,
) -> f32 {
    let revealed = state.reveal.is_revealed(&section.id);
    let alpha = ui.ctx().animate_bool_with_time(
        egui::Id::new(("reveal", section.id.as_str())),
        revealed,
        REVEAL_SECONDS,
    );
    // Sections rise into place as they fade in.
    ui.add_space(SECTION_GAP + (1.0 - alpha) * REVEAL_RISE);
    let frame = egui::Frame::none()
        .fill(palette.card_fill.gamma_multiply(alpha))
        .stroke(egui::Stroke::new(1.0, palette.card_stroke.gamma_multiply(alpha)))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(16.0, 12.0));
    let response = frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(&section.title)
                    .size(22.0)
                    .strong()
                    .color(palette.heading.gamma_multiply(alpha)),
            );
            ui.add_space(6.0);
            match &section.body {
                SectionBody::Paragraphs(paragraphs) => {
                    for paragraph in paragraphs {
                        ui.label(
                            RichText::new(paragraph).color(palette.text.gamma_multiply(alpha)),
                        );
                        ui.add_space(4.0);
                    }
                }
                SectionBody::Cards(cards) => {
                    render_cards(ui, &section.id, cards, state, palette, alpha);
                }
                SectionBody::Table { header, rows } => {
                    render_table(ui, &section.id, header, rows, palette, alpha);
                }
                SectionBody::Accordion(entries) => {
                    render_accordion(ui, &section.id, entries, state, palette, alpha);
                }
                SectionBody::ContactForm => {
                    render_contact_form(ui, state, palette, alpha, contact_email);
                }
            }
        })
        .response;
    if state.reveal.observe(&section.id, response.rect, viewport) && !revealed {
        ui.ctx().request_repaint();
    }
    response.rect.top()
}

fn render_cards(
    ui: &mut egui::Ui,
    section_id: &str,
    cards: &[Card],
    state: &mut AppState,
    palette: &'static Palette,
    alpha: f32,
) {
    for card in cards {
        let key = format!("{section_id}::{}", card.title);
        access::seed_expansion_state(&mut state.expanded, &key);
        let expanded = state.expanded.get(&key).copied().unwrap_or(false);
        egui::Frame::none()
            .fill(palette.input_fill.gamma_multiply(alpha))
            .stroke(egui::Stroke::new(1.0, palette.card_stroke.gamma_multiply(alpha)))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::symmetric(10.0, 8.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let header = ui.add(
                    egui::Label::new(
                        RichText::new(&card.title)
                            .strong()
                            .color(palette.text.gamma_multiply(alpha)),
                    )
                    .sense(egui::Sense::click()),
                );
                if access::activated(&header) {
                    if let Some(open) = state.expanded.get_mut(&key) {
                        *open = !*open;
                    }
                }
                ui.label(
                    RichText::new(&card.subtitle)
                        .small()
                        .color(palette.muted.gamma_multiply(alpha)),
                );
                ui.label(RichText::new(&card.summary).color(palette.text.gamma_multiply(alpha)));
                if expanded {
                    ui.add_space(4.0);
                    for detail in &card.details {
                        ui.label(
                            RichText::new(format!("• {detail}"))
                                .color(palette.text.gamma_multiply(alpha)),
                        );
                    }
                }
            });
        ui.add_space(8.0);
    }
}

fn render_table(
    ui: &mut egui::Ui,
    section_id: &str,
    header: &[String; 2],
    rows: &[[String; 2]],
    palette: &'static Palette,
    alpha: f32,
) {
    egui::Grid::new(("table", section_id))
        .num_columns(2)
        .spacing([32.0, 6.0])
        .show(ui, |ui| {
            for cell in header {
                ui.label(
                    RichText::new(cell)
                        .strong()
                        .color(palette.table_header_text.gamma_multiply(alpha))
                        .background_color(palette.table_header_fill.gamma_multiply(alpha)),
                );
            }
            ui.end_row();
            for row in rows {
                for cell in row {
                    ui.label(RichText::new(cell).color(palette.text.gamma_multiply(alpha)));
                }
                ui.end_row();
            }
        });
}

fn render_accordion(
    ui: &mut egui::Ui,
    section_id: &str,
    entries: &[AccordionEntry],
    state: &mut AppState,
    palette: &'static Palette,
    alpha: f32,
) {
    for entry in entries {
        let key = format!("{section_id}::{}", entry.title);
        access::seed_expansion_state(&mut state.expanded, &key);
        let open = state.expanded.get(&key).copied().unwrap_or(false);
        let response = egui::CollapsingHeader::new(
            RichText::new(&entry.title).color(palette.text.gamma_multiply(alpha)),
        )
        .id_source(&key)
        .open(Some(open))
        .show(ui, |ui| {
            ui.label(RichText::new(&entry.body).color(palette.muted.gamma_multiply(alpha)));
        });
        if access::activated(&response.header_response) {
            if let Some(value) = state.expanded.get_mut(&key) {
                *value = !open;
            }
        }
    }
}

fn render_contact_form(
    ui: &mut egui::Ui,
    state: &mut AppState,
    palette: &'static Palette,
    alpha: f32,
    contact_email: &str,
) {
    let text = palette.text.gamma_multiply(alpha);
    ui.label(RichText::new("Name").color(text));
    ui.add(
        egui::TextEdit::singleline(&mut state.form.name)
            .hint_text("Your name")
            .desired_width(320.0),
    );
    ui.label(RichText::new("Email").color(text));
    ui.add(
        egui::TextEdit::singleline(&mut state.form.email)
            .hint_text("you@example.com")
            .desired_width(320.0),
    );
    ui.label(RichText::new("Message").color(text));
    ui.add(
        egui::TextEdit::multiline(&mut state.form.message)
            .hint_text("What would you like to say?")
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);
    if ui.button("Send").clicked() {
        match state.form.validate() {
            Err(issue) => {
                state.notice = Some(Notice::Error(issue.message().to_string()));
            }
            Ok(()) => {
                let url = state.form.mailto_url(contact_email);
                ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                state.notice = Some(Notice::Info(form::CONFIRMATION.to_string()));
                tracing::info!("contact form handed off to the mail client");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Event, Modifiers, PointerButton, Pos2, Rect, pos2, vec2};

    fn click_at(pos: Pos2) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))),
            events: vec![
                Event::PointerMoved(pos),
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    modifiers: Modifiers::NONE,
                },
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: false,
                    modifiers: Modifiers::NONE,
                },
            ],
            ..Default::default()
        }
    }

    fn frame(ctx: &egui::Context, input: egui::RawInput, notice_pending: bool) -> bool {
        let mut clicked = false;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                if ui
                    .add_sized([200.0, 40.0], egui::Button::new("Send"))
                    .clicked()
                {
                    clicked = true;
                }
            });
            if notice_pending {
                blocking_backdrop(ctx);
            }
        });
        clicked
    }

    #[test]
    fn pending_notice_blocks_the_page_behind_it() {
        let target = pos2(100.0, 28.0);

        let without = egui::Context::default();
        frame(&without, egui::RawInput::default(), false);
        assert!(
            frame(&without, click_at(target), false),
            "sanity: the button is clickable when no notice is pending"
        );

        let with = egui::Context::default();
        frame(&with, egui::RawInput::default(), true);
        assert!(
            !frame(&with, click_at(target), true),
            "a pending notice must swallow clicks aimed at the page"
        );
    }
}
