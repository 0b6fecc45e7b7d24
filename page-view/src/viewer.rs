//! Interactive portfolio page preview built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the page state (two
//! bubble fields, contact form, accordion, navigation) and implements
//! [`eframe::App`] to render the page and its controls.

use eframe::App;
use glam::Vec2;
use page_core::{
    accordion::Accordion,
    config::FieldConfig,
    field::BubbleField,
    form::{self, ContactForm, SentEmails, SubmissionEndpoint, SubmissionError},
    nav::{self, Section},
    skills,
    typewriter::Typewriter,
};
use rand::Rng;

/// Rendered height of the contact info card hosting the first field.
const CONTACT_CARD_HEIGHT: f32 = 240.0;
/// Rendered height of the footer strip hosting the second field.
const FOOTER_HEIGHT: f32 = 150.0;
/// Seconds a form feedback message stays on screen.
const FEEDBACK_SECS: f64 = 5.0;
/// Seconds per revealed tagline character.
const TAGLINE_CHAR_INTERVAL: f64 = 0.15;
/// Seconds the skill meters take to fill once their group opens.
const METER_FILL_SECS: f32 = 2.0;

const SUCCESS_FEEDBACK: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you soon!";
const FAILURE_FEEDBACK: &str =
    "Sorry, there was an error sending your message. Please try again or contact me directly.";
const DUPLICATE_NOTICE: &str = "You have already sent a message with this email.";

const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(23, 37, 64);
const FOOTER_FILL: egui::Color32 = egui::Color32::from_rgb(16, 26, 45);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);

/// One accordion group in the skills section.
struct SkillGroup {
    name: &'static str,
    items: Vec<(&'static str, &'static str)>,
}

/// One entry in the experience section; `details` feed the modal.
struct ExperienceEntry {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    details: Vec<&'static str>,
}

/// Transient message under the contact form.
struct FormFeedback {
    message: String,
    is_error: bool,
    shown_at: f64,
}

/// Default destination for validated submissions: accepts everything
/// and logs the hand-off. Real delivery lives outside this preview.
struct LogEndpoint;

impl SubmissionEndpoint for LogEndpoint {
    fn submit(&mut self, form: &ContactForm) -> Result<(), SubmissionError> {
        log::info!("contact message accepted from {}", form.full_name());
        Ok(())
    }
}

/// Main application state for the page preview.
///
/// [`Viewer`] glues together:
/// - Two independent [`BubbleField`] instances (contact card, footer),
///   each stepped once per frame against its freshly measured rect.
/// - The contact form with validation, duplicate-email warning, and the
///   submission boundary.
/// - Page chrome: nav highlighting driven by measured section geometry,
///   the skills accordion, the experience modal, and the back-to-top
///   button.
/// - Tuning controls in the side panel, run/pause/respawn in the top
///   bar, counters in the status bar.
pub struct Viewer {
    contact_field: BubbleField,
    footer_field: BubbleField,
    cfg: FieldConfig,
    contact_bubbles: usize,
    footer_bubbles: usize,

    rng: rand::rngs::ThreadRng,

    tagline: Typewriter,
    tagline_started: Option<f64>,

    skills: Vec<SkillGroup>,
    accordion: Accordion,

    experience: Vec<ExperienceEntry>,
    open_experience: Option<usize>,

    form: ContactForm,
    sent_emails: SentEmails,
    endpoint: Box<dyn SubmissionEndpoint>,
    feedback: Option<FormFeedback>,
    duplicate_notice: bool,

    sections: Vec<Section>,
    scroll_y: f32,
    scroll_target: Option<f32>,
}

impl Viewer {
    /// Creates the page with both bubble fields already running, the
    /// way the page animates from load.
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let cfg = FieldConfig::default();

        let contact_field = Self::spawn_field(8, Vec2::new(560.0, CONTACT_CARD_HEIGHT), cfg, &mut rng);
        let footer_field = Self::spawn_field(12, Vec2::new(960.0, FOOTER_HEIGHT), cfg, &mut rng);

        Self {
            contact_field,
            footer_field,
            cfg,
            contact_bubbles: 8,
            footer_bubbles: 12,
            rng,
            tagline: Typewriter::new(
                "Systems developer · Rust enthusiast · coffee powered",
                TAGLINE_CHAR_INTERVAL,
            ),
            tagline_started: None,
            skills: skill_groups(),
            accordion: Accordion::new(),
            experience: experience_entries(),
            open_experience: None,
            form: ContactForm::default(),
            sent_emails: SentEmails::new(),
            endpoint: Box::new(LogEndpoint),
            feedback: None,
            duplicate_notice: false,
            sections: Vec::new(),
            scroll_y: 0.0,
            scroll_target: None,
        }
    }

    /// Builds a running field with `count` bubbles of assorted sizes.
    /// The seed bounds only matter until the first frame measures the
    /// real container rect.
    fn spawn_field(
        count: usize,
        seed_bounds: Vec2,
        cfg: FieldConfig,
        rng: &mut impl Rng,
    ) -> BubbleField {
        let sizes: Vec<Vec2> = (0..count)
            .map(|_| Vec2::splat(rng.random_range(16.0..=56.0)))
            .collect();
        let mut field = BubbleField::random(&sizes, seed_bounds, cfg, rng);
        field.start();
        field
    }

    /// Replaces both fields with freshly randomized markers, keeping
    /// the current run state.
    fn respawn_fields(&mut self) {
        let was_running = self.is_running();
        self.contact_field = Self::spawn_field(
            self.contact_bubbles,
            Vec2::new(560.0, CONTACT_CARD_HEIGHT),
            self.cfg,
            &mut self.rng,
        );
        self.footer_field = Self::spawn_field(
            self.footer_bubbles,
            Vec2::new(960.0, FOOTER_HEIGHT),
            self.cfg,
            &mut self.rng,
        );
        self.set_running(was_running);
    }

    fn is_running(&self) -> bool {
        self.contact_field.is_running()
    }

    fn set_running(&mut self, run: bool) {
        if run {
            self.contact_field.start();
            self.footer_field.start();
        } else {
            self.contact_field.stop();
            self.footer_field.stop();
        }
    }

    /// Drops the feedback message once it has been on screen long
    /// enough.
    fn prune_feedback(&mut self, now: f64) {
        if self
            .feedback
            .as_ref()
            .is_some_and(|fb| now - fb.shown_at > FEEDBACK_SECS)
        {
            self.feedback = None;
        }
    }

    /// Re-checks the duplicate warning against the current email field.
    fn refresh_duplicate_notice(&mut self) {
        let email = self.form.email.trim();
        self.duplicate_notice = !email.is_empty() && self.sent_emails.contains(email);
    }

    /// Validates and hands the form to the endpoint, turning the
    /// outcome into visitor-facing feedback.
    fn handle_submit(&mut self, now: f64) {
        let errors = form::validate(&self.form);
        if let Some(first) = errors.first() {
            self.feedback = Some(FormFeedback {
                message: first.to_string(),
                is_error: true,
                shown_at: now,
            });
            return;
        }

        match self.endpoint.submit(&self.form) {
            Ok(()) => {
                self.sent_emails.record(&self.form.email);
                self.form.reset();
                self.duplicate_notice = false;
                self.feedback = Some(FormFeedback {
                    message: SUCCESS_FEEDBACK.to_owned(),
                    is_error: false,
                    shown_at: now,
                });
            }
            Err(err) => {
                log::debug!("contact submission failed: {err}");
                self.feedback = Some(FormFeedback {
                    message: FAILURE_FEEDBACK.to_owned(),
                    is_error: true,
                    shown_at: now,
                });
            }
        }
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(1.0));
        });
    }

    /// Builds the navbar: section links with active highlighting plus
    /// the run controls. The bar condenses past the scroll threshold.
    fn ui_nav_panel(&mut self, ctx: &egui::Context, active: Option<&str>) {
        let fill = if nav::navbar_condensed(self.scroll_y) {
            egui::Color32::from_rgb(30, 30, 34)
        } else {
            egui::Color32::from_rgb(40, 40, 46)
        };
        let frame = egui::Frame::new()
            .fill(fill)
            .inner_margin(egui::Margin::symmetric(16, 8));

        egui::TopBottomPanel::top("nav_panel").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Sam Carter").strong().size(18.0));
                ui.separator();

                for (id, title) in [
                    ("home", "Home"),
                    ("skills", "Skills"),
                    ("experience", "Experience"),
                    ("contact", "Contact"),
                ] {
                    let selected = active == Some(id);
                    if ui.selectable_label(selected, title).clicked()
                        && let Some(section) = self.sections.iter().find(|s| s.id == id)
                    {
                        self.scroll_target = Some(nav::click_target(section.top));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(if self.is_running() { "⏸ Pause" } else { "▶ Run" })
                        .clicked()
                    {
                        let run = !self.is_running();
                        self.set_running(run);
                    }
                    if ui.button("Respawn bubbles").clicked() {
                        self.respawn_fields();
                    }
                });
            });
        });
    }

    /// Builds the bottom status bar (bubble counts, scroll, section).
    fn ui_status_bar(&self, ctx: &egui::Context, active: Option<&str>) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("section = {}", active.unwrap_or("—")));
                ui.label(format!("scroll = {:.0} px", self.scroll_y));
                ui.separator();
                ui.label(format!(
                    "bubbles = {} + {}",
                    self.contact_field.markers().len(),
                    self.footer_field.markers().len()
                ));
                ui.label(if self.is_running() { "running" } else { "paused" });
            });
        });
    }

    /// Builds the right-hand tuning panel for the bubble fields.
    fn ui_tuning_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("tuning_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Bubble tuning");

                ui.separator();
                ui.label("Repulsion");
                Self::labeled_drag_f32(
                    ui,
                    "margin:",
                    &mut self.cfg.repulsion_margin,
                    0.0..=100.0,
                    0.5,
                );
                Self::labeled_drag_f32(
                    ui,
                    "impulse steps:",
                    &mut self.cfg.impulse_steps,
                    0.0..=4.0,
                    0.1,
                );

                ui.separator();
                ui.label("Speed range (applied on respawn)");
                Self::labeled_drag_f32(ui, "min:", &mut self.cfg.min_speed, 0.0..=5.0, 0.05);
                Self::labeled_drag_f32(ui, "max:", &mut self.cfg.max_speed, 0.0..=5.0, 0.05);

                ui.separator();
                ui.label("Bubble counts (applied on respawn)");
                Self::labeled_drag_usize(ui, "contact card:", &mut self.contact_bubbles, 1..=24);
                Self::labeled_drag_usize(ui, "footer:", &mut self.footer_bubbles, 1..=24);

                ui.separator();
                if ui.button("Reset tuning to defaults").clicked() {
                    self.cfg = FieldConfig::default();
                }
            });
    }

    /// Measures the hover position, steps the field against the rect
    /// measured this frame, and paints the card with its bubbles.
    fn bubble_card(
        ui: &mut egui::Ui,
        field: &mut BubbleField,
        size: egui::Vec2,
        fill: egui::Color32,
    ) -> egui::Rect {
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

        // Container-relative pointer, sentinel when not hovered.
        match response.hover_pos() {
            Some(p) => field.pointer_moved(Vec2::new(p.x - rect.left(), p.y - rect.top())),
            None => field.pointer_left(),
        }

        // Bounds come from this frame's layout, never a cached value.
        field.step(Vec2::new(rect.width(), rect.height()));

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, egui::CornerRadius::same(12), fill);

        let bubble_fill = egui::Color32::from_rgba_unmultiplied(120, 170, 255, 70);
        let bubble_rim = egui::Color32::from_rgba_unmultiplied(180, 215, 255, 130);
        for m in field.markers() {
            let c = egui::pos2(rect.left() + m.center().x, rect.top() + m.center().y);
            painter.circle_filled(c, m.radius(), bubble_fill);
            painter.circle_stroke(c, m.radius(), egui::Stroke::new(1.0, bubble_rim));
        }

        rect
    }

    fn hero_section(&mut self, ui: &mut egui::Ui, now: f64) {
        let started = *self.tagline_started.get_or_insert(now);
        let elapsed = now - started;

        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Hi, I'm Sam Carter").size(32.0).strong());
            ui.add_space(8.0);

            let mut tagline = self.tagline.visible(elapsed).to_owned();
            if !self.tagline.is_done(elapsed) {
                tagline.push('▌');
            }
            ui.label(egui::RichText::new(tagline).size(18.0).color(ACCENT));

            ui.add_space(16.0);
            ui.label("I build reliable backends and the odd decorative bubble.");
        });
        ui.add_space(48.0);
    }

    fn skills_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Skills");
        ui.add_space(8.0);

        let mut toggled = None;
        for (i, group) in self.skills.iter().enumerate() {
            let open = self.accordion.is_open(i);
            let arrow = if open { "▾" } else { "▸" };
            if ui
                .selectable_label(open, format!("{arrow} {}", group.name))
                .clicked()
            {
                toggled = Some(i);
            }

            if open {
                ui.indent(("skill_group", i), |ui| {
                    for &(skill, level) in &group.items {
                        let target = skills::percent_for_label(level) / 100.0;
                        let fill = ui.ctx().animate_value_with_time(
                            egui::Id::new(("skill_meter", i, skill)),
                            target,
                            METER_FILL_SECS,
                        );
                        ui.horizontal(|ui| {
                            ui.label(skill);
                            ui.add(
                                egui::ProgressBar::new(fill)
                                    .desired_width(180.0)
                                    .text(level),
                            );
                        });
                    }
                });
            }
        }
        if let Some(i) = toggled {
            self.accordion.toggle(i);
        }
        ui.add_space(32.0);
    }

    fn experience_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Experience");
        ui.add_space(8.0);

        let mut opened = None;
        for (i, entry) in self.experience.iter().enumerate() {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(entry.title).strong());
                            ui.label(format!("{} · {}", entry.company, entry.period));
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("View details").clicked() {
                                    opened = Some(i);
                                }
                            },
                        );
                    });
                });
            ui.add_space(6.0);
        }
        if opened.is_some() {
            self.open_experience = opened;
        }
        ui.add_space(32.0);
    }

    fn contact_section(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.heading("Contact");
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            // Info card with the first bubble field floating behind the
            // text.
            let width = cols[0].available_width();
            let rect = Self::bubble_card(
                &mut cols[0],
                &mut self.contact_field,
                egui::vec2(width, CONTACT_CARD_HEIGHT),
                CARD_FILL,
            );
            let painter = cols[0].painter_at(rect);
            painter.text(
                rect.left_top() + egui::vec2(16.0, 16.0),
                egui::Align2::LEFT_TOP,
                "Let's talk",
                egui::FontId::proportional(22.0),
                egui::Color32::WHITE,
            );
            painter.text(
                rect.left_top() + egui::vec2(16.0, 48.0),
                egui::Align2::LEFT_TOP,
                "sam@samcarter.dev",
                egui::FontId::proportional(15.0),
                ACCENT,
            );

            self.contact_form_ui(&mut cols[1], now);
        });
        ui.add_space(32.0);
    }

    fn contact_form_ui(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.form.first_name)
                    .hint_text("First name")
                    .desired_width(120.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.form.last_name)
                    .hint_text("Last name")
                    .desired_width(120.0),
            );
        });

        let email_resp = ui.add(
            egui::TextEdit::singleline(&mut self.form.email)
                .hint_text("Email")
                .desired_width(248.0),
        );
        if email_resp.changed() {
            self.refresh_duplicate_notice();
        }
        if self.duplicate_notice {
            ui.colored_label(ACCENT, DUPLICATE_NOTICE);
        }

        ui.add(
            egui::TextEdit::multiline(&mut self.form.message)
                .hint_text("Your message")
                .desired_width(248.0)
                .desired_rows(4),
        );

        if ui.button("Send message").clicked() {
            self.handle_submit(now);
        }

        if let Some(fb) = &self.feedback {
            let color = if fb.is_error {
                egui::Color32::from_rgb(239, 68, 68)
            } else {
                egui::Color32::from_rgb(16, 185, 129)
            };
            ui.colored_label(color, &fb.message);
        }
    }

    fn footer_section(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width();
        let rect = Self::bubble_card(
            ui,
            &mut self.footer_field,
            egui::vec2(width, FOOTER_HEIGHT),
            FOOTER_FILL,
        );
        let painter = ui.painter_at(rect);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "© 2026 Sam Carter · thanks for scrolling",
            egui::FontId::proportional(14.0),
            egui::Color32::from_gray(180),
        );
    }

    /// Builds the scrollable page body, measuring each section's
    /// geometry for the nav highlighting.
    fn ui_page(&mut self, ctx: &egui::Context, now: f64) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut measured: Vec<Section> = Vec::with_capacity(4);

            let mut scroll = egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false]);
            if let Some(target) = self.scroll_target.take() {
                scroll = scroll.vertical_scroll_offset(target);
            }

            let output = scroll.show(ui, |ui| {
                let origin = ui.cursor().top();

                let top = ui.cursor().top() - origin;
                let rect = ui.scope(|ui| self.hero_section(ui, now)).response.rect;
                measured.push(Section::new("home", top, rect.height()));

                let top = ui.cursor().top() - origin;
                let rect = ui.scope(|ui| self.skills_section(ui)).response.rect;
                measured.push(Section::new("skills", top, rect.height()));

                let top = ui.cursor().top() - origin;
                let rect = ui.scope(|ui| self.experience_section(ui)).response.rect;
                measured.push(Section::new("experience", top, rect.height()));

                let top = ui.cursor().top() - origin;
                let rect = ui.scope(|ui| self.contact_section(ui, now)).response.rect;
                measured.push(Section::new("contact", top, rect.height()));

                self.footer_section(ui);
            });

            self.scroll_y = output.state.offset.y;
            self.sections = measured;
        });
    }

    /// Modal with the full detail list of the opened experience entry.
    fn ui_experience_modal(&mut self, ctx: &egui::Context) {
        let Some(i) = self.open_experience else {
            return;
        };
        let entry = &self.experience[i];

        let mut close_clicked = false;
        let modal = egui::Modal::new(egui::Id::new("experience_modal")).show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.heading(entry.title);
            ui.label(egui::RichText::new(entry.company).strong());
            ui.label(entry.period);
            ui.separator();
            for detail in &entry.details {
                ui.label(format!("• {detail}"));
            }
            ui.separator();
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

        if close_clicked || modal.should_close() {
            self.open_experience = None;
        }
    }

    /// Floating back-to-top button, shown past the scroll threshold.
    fn ui_scroll_top_button(&mut self, ctx: &egui::Context) {
        if !nav::scroll_top_visible(self.scroll_y) {
            return;
        }
        egui::Area::new(egui::Id::new("scroll_to_top"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -48.0))
            .show(ctx, |ui| {
                if ui.button("⬆ Top").clicked() {
                    self.scroll_target = Some(0.0);
                }
            });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// Panels are laid out first, then the scrollable page body steps
    /// and draws both bubble fields. A repaint is requested while the
    /// fields run or the tagline is still typing.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.prune_feedback(now);

        let active = nav::active_section(&self.sections, self.scroll_y).map(str::to_owned);
        let active = active.as_deref();

        self.ui_nav_panel(ctx, active);
        self.ui_status_bar(ctx, active);
        self.ui_tuning_panel(ctx);

        // Live tuning applies to both fields from the same panel.
        self.contact_field.cfg = self.cfg;
        self.footer_field.cfg = self.cfg;

        self.ui_page(ctx, now);
        self.ui_experience_modal(ctx);
        self.ui_scroll_top_button(ctx);

        let typing = self
            .tagline_started
            .is_some_and(|started| !self.tagline.is_done(now - started));
        if self.is_running() || typing {
            ctx.request_repaint();
        }
    }
}

fn skill_groups() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            name: "Languages",
            items: vec![
                ("Rust", "Advanced"),
                ("TypeScript", "Intermediate"),
                ("Python", "Intermediate"),
                ("C++", "Basic"),
            ],
        },
        SkillGroup {
            name: "Backend & Systems",
            items: vec![
                ("Linux", "Advanced"),
                ("PostgreSQL", "Intermediate"),
                ("Docker", "Intermediate"),
                ("Kubernetes", "Learning"),
            ],
        },
        SkillGroup {
            name: "Frontend",
            items: vec![
                ("HTML & CSS", "Advanced"),
                ("React", "Intermediate"),
                ("Svelte", "Learning"),
            ],
        },
    ]
}

fn experience_entries() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Senior Systems Engineer",
            company: "Northwind Labs",
            period: "2022 - present",
            details: vec![
                "Own the ingestion pipeline moving ~40k events/s through Rust services",
                "Cut p99 latency of the query layer from 240 ms to 35 ms",
                "Mentor three engineers and run the on-call rotation",
            ],
        },
        ExperienceEntry {
            title: "Backend Developer",
            company: "Cobalt Software",
            period: "2019 - 2022",
            details: vec![
                "Built the billing reconciliation service and its migration tooling",
                "Introduced property-based testing across the payments code",
                "Led the move from a cron monolith to queued workers",
            ],
        },
        ExperienceEntry {
            title: "Junior Developer",
            company: "Brightpath Studio",
            period: "2017 - 2019",
            details: vec![
                "Shipped client sites and internal dashboards",
                "Automated the deployment checklist into a one-command release",
            ],
        },
    ]
}
