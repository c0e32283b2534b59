//! Enumerators page: status tabs, summary cards, users table and the
//! add-enumerator dialog.

use chrono::NaiveDate;
use egui::{Color32, Response, TextEdit, Ui};
use landgrid_business::grid::{CellValue, Column, ColumnSet, GridError, TableConfig};
use landgrid_business::{UserFilter, UserRecord, UsersState, mock_users};

use crate::state::State;
use crate::utils::colors::{COLOR_BLUE, COLOR_GRAY, COLOR_GREEN, COLOR_RED};
use crate::widgets::{self, DataTableState};

/// Enumerator list, the rows visible under the current tab and the table.
#[derive(Debug)]
pub struct UsersPage {
    pub users: UsersState,
    visible: Vec<UserRecord>,
    pub columns: ColumnSet<UserRecord>,
    pub table: DataTableState,
}

impl UsersPage {
    pub fn new(config: &TableConfig) -> Result<Self, GridError> {
        let users = UsersState::new(mock_users());
        Ok(Self {
            visible: users.filtered(),
            users,
            columns: user_columns()?,
            table: DataTableState::new(config)?,
        })
    }

    /// Rows shown by the table.
    pub fn visible(&self) -> &[UserRecord] {
        &self.visible
    }

    pub fn set_filter(&mut self, filter: UserFilter) {
        if self.users.filter != filter {
            self.users.filter = filter;
            self.refresh();
        }
    }

    /// Submit the add-enumerator form.
    pub fn submit_new_user(&mut self, today: NaiveDate) {
        if self.users.submit_new_user(today).is_ok() {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        self.visible = self.users.filtered();
        self.table.invalidate();
    }
}

pub fn user_columns() -> Result<ColumnSet<UserRecord>, GridError> {
    ColumnSet::new(vec![
        Column::new("user_name", "User Name", |u: &UserRecord| {
            u.user_name.as_str().into()
        }),
        Column::new("email", "Email", |u: &UserRecord| u.email.as_str().into()),
        Column::new("status", "Status", |u: &UserRecord| u.status.as_str().into()).cell(
            |ui, _, u| {
                widgets::chip(ui, u.status.as_str(), widgets::user_status_color(u.status));
            },
        ),
        Column::new("last_login", "Last Login", |u: &UserRecord| {
            u.last_login.into()
        })
        .cell(|ui, value, _| {
            if matches!(value, CellValue::Empty) {
                ui.weak("N/A");
            } else {
                ui.label(value.search_text());
            }
        }),
        Column::new("created_at", "Created At", |u: &UserRecord| {
            u.created_at.into()
        }),
        Column::new("lga", "LGA", |u: &UserRecord| u.lga.as_str().into()),
        Column::new("ward", "Ward", |u: &UserRecord| u.ward.as_str().into()),
    ])
}

/// Renders the enumerators page. `today` stamps newly added users.
pub fn users_page(state: &mut State, ui: &mut Ui, today: NaiveDate) -> Response {
    let table_config = state.config.table().clone();
    let page = &mut state.users;

    let response = ui
        .vertical(|ui| {
            ui.heading("Enumerators Management");
            ui.label("Manage your enumerators and view analytics");
            ui.add_space(12.0);

            let mut selected_filter = page.users.filter;
            let mut open_modal = false;
            ui.horizontal(|ui| {
                for filter in UserFilter::ALL {
                    ui.selectable_value(&mut selected_filter, filter, filter.label());
                }
                ui.separator();
                open_modal = ui.button("➕ Add Enumerator").clicked();
            });
            page.set_filter(selected_filter);
            if open_modal {
                page.users.open_add_modal();
            }

            ui.add_space(12.0);
            let stats = page.users.stats();
            ui.horizontal_wrapped(|ui| {
                widgets::stat_card(ui, "Total Enumerators", &stats.total.to_string(), COLOR_BLUE);
                widgets::stat_card(ui, "Active Enumerators", &stats.active.to_string(), COLOR_GREEN);
                widgets::stat_card(
                    ui,
                    "Inactive Enumerators",
                    &stats.inactive.to_string(),
                    COLOR_GRAY,
                );
                widgets::stat_card(
                    ui,
                    "Suspended Enumerators",
                    &stats.suspended.to_string(),
                    COLOR_RED,
                );
            });

            ui.add_space(16.0);
            widgets::data_table(
                ui,
                "users_table",
                &mut page.table,
                Some(page.visible.as_slice()),
                &page.columns,
                &table_config,
            );
        })
        .response;

    if state.users.users.add_modal_open {
        add_user_modal(&mut state.users, ui, today);
    }

    response
}

fn add_user_modal(page: &mut UsersPage, ui: &mut Ui, today: NaiveDate) {
    let mut submit = false;
    let mut cancel = false;

    let modal = egui::Modal::new(egui::Id::new("add_enumerator_modal")).show(ui.ctx(), |ui| {
        ui.heading("Add New Enumerators");
        ui.add_space(8.0);

        ui.label("User Name");
        ui.add(TextEdit::singleline(&mut page.users.new_user_name).hint_text("Enter..."));
        ui.label("Email");
        ui.add(TextEdit::singleline(&mut page.users.new_user_email).hint_text("Enter..."));

        if let Some(error) = &page.users.add_error {
            ui.colored_label(Color32::RED, error);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            cancel = ui.button("Cancel").clicked();
            submit = ui.button("Add User").clicked();
        });
    });

    if submit {
        page.submit_new_user(today);
    } else if cancel || modal.should_close() {
        page.users.close_add_modal();
    }
}
