//! Demand Notice Center page.
//!
//! Layout: summary cards, template picker and custom message editor, the
//! owner selection table, send button with its success banner, and the
//! message preview card.

use chrono::{DateTime, Utc};
use egui::{Align, ComboBox, Frame, Layout, Response, RichText, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};
use landgrid_business::{
    DemandNoticeState, NoticeTemplate, PropertyOwner, SENT_BANNER_SECONDS, group_thousands, naira,
};

use crate::state::State;
use crate::utils::colors::{COLOR_AMBER, COLOR_BLUE, COLOR_GREEN, COLOR_RED};
use crate::widgets;

const ROW_HEIGHT: f32 = 28.0;
const OWNER_TABLE_HEIGHT: f32 = 640.0;

/// Owner table interaction gathered while drawing.
enum OwnerAction {
    Toggle(u32),
    Preview(u32),
}

/// Renders the notice center. `now` drives the success banner.
pub fn demand_notice_page(state: &mut State, ui: &mut Ui, now: DateTime<Utc>) -> Response {
    let notice = &mut state.demand_notice;

    ui.vertical(|ui| {
        ui.heading("📧 Demand Notice Center");
        ui.add_space(12.0);

        let analytics = notice.analytics();
        ui.horizontal_wrapped(|ui| {
            widgets::stat_card(
                ui,
                "Total Notices",
                &analytics.total_notices.to_string(),
                COLOR_BLUE,
            );
            widgets::stat_card(
                ui,
                "Total Outstanding",
                &naira(analytics.total_outstanding),
                COLOR_GREEN,
            );
            widgets::stat_card(ui, "Paid", &analytics.paid.to_string(), COLOR_AMBER);
            widgets::stat_card(ui, "Unpaid", &analytics.unpaid.to_string(), COLOR_RED);
        });

        ui.add_space(16.0);
        Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("Send Bulk Notice");
            ui.add_space(8.0);
            message_editor(ui, notice);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Select All").clicked() {
                    notice.select_all();
                }
                if ui.button("Clear Selection").clicked() {
                    notice.clear_selection();
                }
                ui.label(format!("{} selected", notice.selected_count()));
            });

            ui.add_space(8.0);
            owner_table(ui, notice);

            ui.add_space(8.0);
            let can_send = notice.selected_count() > 0;
            if ui
                .add_enabled(can_send, egui::Button::new("Send Message"))
                .clicked()
            {
                notice.send(now);
            }

            if notice.sent_banner_visible(now) {
                ui.colored_label(COLOR_GREEN, RichText::new("Messages sent successfully!").strong());
                ui.ctx()
                    .request_repaint_after(std::time::Duration::from_secs(
                        SENT_BANNER_SECONDS.unsigned_abs(),
                    ));
            }
        });

        preview_card(ui, notice);
    })
    .response
}

fn message_editor(ui: &mut Ui, notice: &mut DemandNoticeState) {
    ui.horizontal(|ui| {
        ui.label("Select Template:");
        let mut template = notice.template();
        ComboBox::from_id_salt("notice_template")
            .selected_text(template.title())
            .show_ui(ui, |ui| {
                for option in NoticeTemplate::ALL {
                    ui.selectable_value(&mut template, option, option.title());
                }
            });
        if template != notice.template() {
            notice.set_template(template);
        }
    });

    ui.label("Custom Message (optional):");
    let hint = notice.template().body();
    ui.add(
        TextEdit::multiline(&mut notice.custom_message)
            .hint_text(hint)
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
    ui.label(
        RichText::new("Use {{name}}, {{propertyId}}, and {{price}} as placeholders.").small(),
    );
}

fn owner_table(ui: &mut Ui, notice: &mut DemandNoticeState) {
    let mut action = None;

    ui.push_id("notice_owner_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(OWNER_TABLE_HEIGHT)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::exact(56.0))
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(110.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::remainder())
            .header(ROW_HEIGHT, |mut header| {
                for title in ["Select", "Name", "Property ID", "Phone", "Outstanding (₦)", "Preview"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, notice.owners.len(), |mut row| {
                    let Some(owner) = notice.owners.get(row.index()) else {
                        return;
                    };
                    let selected = notice.is_selected(owner.id);
                    row.set_selected(selected);

                    row.col(|ui| {
                        let mut checked = selected;
                        if ui.checkbox(&mut checked, "").changed() {
                            action = Some(OwnerAction::Toggle(owner.id));
                        }
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&owner.name).strong());
                    });
                    row.col(|ui| {
                        ui.label(&owner.property_id);
                    });
                    row.col(|ui| {
                        ui.label(&owner.phone);
                    });
                    row.col(|ui| {
                        ui.label(group_thousands(owner.price));
                    });
                    row.col(|ui| {
                        if ui
                            .add_enabled(selected, egui::Button::new("Preview"))
                            .clicked()
                        {
                            action = Some(OwnerAction::Preview(owner.id));
                        }
                    });
                });
            });
    });

    // Apply after the table so `notice.owners` is no longer borrowed.
    match action {
        Some(OwnerAction::Toggle(id)) => notice.toggle_owner(id),
        Some(OwnerAction::Preview(id)) => {
            notice.open_preview(id);
        }
        None => {}
    }
}

fn preview_card(ui: &mut Ui, notice: &mut DemandNoticeState) {
    let Some(owner) = notice.preview_owner().cloned() else {
        return;
    };

    ui.add_space(16.0);
    let close = Frame::group(ui.style())
        .show(ui, |ui| {
            ui.strong("Message Preview");
            ui.label(recipient_line(&owner));
            ui.add_space(4.0);
            ui.label(RichText::new(notice.render_message(&owner)).monospace());
            ui.add_space(4.0);
            ui.button("Close Preview").clicked()
        })
        .inner;

    if close {
        notice.close_preview();
    }
}

fn recipient_line(owner: &PropertyOwner) -> String {
    format!("To: {} ({})", owner.name, owner.phone)
}
