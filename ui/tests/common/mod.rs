use egui_kittest::Harness;
use landgrid_business::grid::{Column, ColumnSet, TableConfig};
use landgrid_ui::LandgridApp;
use landgrid_ui::state::State;
use landgrid_ui::widgets::{DataTableState, data_table};

/// Harness size large enough that every table row is laid out.
pub const HARNESS_SIZE: egui::Vec2 = egui::vec2(1400.0, 1800.0);

pub struct TestCtx<'a, T = State> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a> TestCtx<'a, LandgridApp> {
    #[allow(unused)]
    pub fn new_app() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let state = State::test().expect("test state should build");
        let app = LandgridApp::new(state);
        let harness = Harness::builder()
            .with_size(HARNESS_SIZE)
            .build_eframe(|_| app);

        Self { harness }
    }
}

/// A row of the standalone table fixture.
#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub count: i64,
}

/// A data table mounted on its own, outside the dashboard.
pub struct TableFixture {
    pub table: DataTableState,
    pub rows: Option<Vec<Person>>,
    pub columns: ColumnSet<Person>,
    pub config: TableConfig,
}

impl TableFixture {
    #[allow(unused)]
    pub fn new(rows: Option<Vec<Person>>, config: TableConfig) -> Self {
        Self {
            table: DataTableState::new(&config).expect("valid config"),
            rows,
            columns: ColumnSet::new(vec![
                Column::new("name", "Name", |p: &Person| p.name.as_str().into()),
                Column::new("count", "Count", |p: &Person| p.count.into()).searchable(false),
            ])
            .expect("valid columns"),
            config,
        }
    }
}

impl<'a> TestCtx<'a, TableFixture> {
    #[allow(unused)]
    pub fn new_table(fixture: TableFixture) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let harness = Harness::builder().with_size(HARNESS_SIZE).build_ui_state(
            |ui, fixture: &mut TableFixture| {
                data_table(
                    ui,
                    "fixture_table",
                    &mut fixture.table,
                    fixture.rows.as_deref(),
                    &fixture.columns,
                    &fixture.config,
                );
            },
            fixture,
        );

        Self { harness }
    }
}

/// The twelve people "Alice".."Luke" with counts 1..12.
#[allow(unused)]
pub fn twelve_people() -> Vec<Person> {
    [
        "Alice", "Barbara", "Charles", "Diana", "Edward", "Fiona", "George", "Hannah", "Ivan",
        "James", "Kevin", "Luke",
    ]
    .into_iter()
    .zip(1..)
    .map(|(name, count)| Person {
        name: name.to_owned(),
        count,
    })
    .collect()
}

/// `len` people named "Row 00", "Row 01", ...
#[allow(unused)]
pub fn numbered_people(len: i64) -> Vec<Person> {
    (0..len)
        .map(|i| Person {
            name: format!("Row {i:02}"),
            count: 1000 + i,
        })
        .collect()
}
