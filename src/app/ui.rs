//! Control panels: file loading, header-location inputs, column pickers,
//! warnings and the plot trigger.

use tracing::warn;

use crate::persistence;

use super::{plot_view, OverlayApp, StrategyMode};

pub(crate) fn draw(app: &mut OverlayApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.heading(&app.title);
        file_row(app, ui);
        strategy_row(app, ui);
        warning_rows(app, ui);
        ui.add_space(4.0);
    });

    if !app.universe.is_empty() {
        egui::SidePanel::left("columns")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| column_pickers(app, ui));
    }

    let mut fresh = app.chart_is_fresh;
    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(spec) = &app.chart {
            ui.heading(&spec.layout.title);
            plot_view::show(ui, spec, &mut fresh);
        } else if app.files.is_empty() {
            ui.label("Load CSV files to get started.");
        } else {
            ui.label("Select data columns on the left, then press Plot.");
        }
    });
    app.chart_is_fresh = fresh;
}

fn file_row(app: &mut OverlayApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if ui.button("Load CSV files…").clicked() {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .pick_files()
            {
                app.add_paths(&paths);
            }
        }
        if ui.button("Clear files").clicked() {
            app.clear_files();
        }
        ui.label(match app.files.len() {
            0 => "no files loaded".to_string(),
            1 => format!("1 file: {}", app.files[0].0),
            n => format!("{n} files loaded"),
        });

        ui.separator();

        if ui.button("Save settings…").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name("overplot_settings.json")
                .save_file()
            {
                if let Err(e) = persistence::save_settings(&path, &app.settings()) {
                    warn!(error = %e, "failed to save settings");
                }
            }
        }
        if ui.button("Load settings…").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                match persistence::load_settings(&path) {
                    Ok(settings) => app.apply_settings(settings),
                    Err(e) => warn!(error = %e, "failed to load settings"),
                }
            }
        }
        if ui.button("Save PNG").on_hover_text("Save a window screenshot").clicked() {
            app.request_window_shot = true;
        }
    });
}

fn strategy_row(app: &mut OverlayApp, ui: &mut egui::Ui) {
    let before = (app.mode, app.label_row, app.data_start_row, app.skip_rows);

    ui.horizontal(|ui| {
        ui.label("Header location:");
        egui::ComboBox::from_id_salt("header_mode")
            .selected_text(match app.mode {
                StrategyMode::ExplicitRows => "Label row + data start row",
                StrategyMode::SkipRows => "Skip leading rows",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut app.mode,
                    StrategyMode::ExplicitRows,
                    "Label row + data start row",
                );
                ui.selectable_value(&mut app.mode, StrategyMode::SkipRows, "Skip leading rows");
            });
        match app.mode {
            StrategyMode::ExplicitRows => {
                ui.label("Label row (0-based):");
                ui.add(egui::DragValue::new(&mut app.label_row));
                ui.label("Data start row:");
                ui.add(egui::DragValue::new(&mut app.data_start_row));
            }
            StrategyMode::SkipRows => {
                ui.label("Rows to skip:");
                ui.add(egui::DragValue::new(&mut app.skip_rows));
            }
        }
    });

    let after = (app.mode, app.label_row, app.data_start_row, app.skip_rows);
    if before != after && !app.files.is_empty() {
        app.rebuild_tables();
    }
}

fn warning_rows(app: &OverlayApp, ui: &mut egui::Ui) {
    let warn_color = ui.visuals().warn_fg_color;
    for err in &app.read_errors {
        ui.colored_label(warn_color, err);
    }
    for warning in &app.outcome.warnings {
        ui.colored_label(warn_color, warning.to_string());
    }
}

fn column_pickers(app: &mut OverlayApp, ui: &mut egui::Ui) {
    ui.add_space(4.0);
    ui.strong(format!(
        "Primary axis columns (max {})",
        app.max_primary_columns
    ));
    let universe = app.universe.clone();
    for name in &universe {
        let mut checked = app.primary_columns.iter().any(|c| c == name);
        let at_cap = !checked && app.primary_columns.len() >= app.max_primary_columns;
        if ui
            .add_enabled(!at_cap, egui::Checkbox::new(&mut checked, name))
            .changed()
        {
            app.toggle_primary(name);
        }
    }

    ui.separator();
    ui.strong("Secondary axis columns");
    for name in &universe {
        let mut checked = app.secondary_columns.iter().any(|c| c == name);
        if ui.checkbox(&mut checked, name).changed() {
            app.toggle_secondary(name);
        }
    }

    ui.separator();
    if ui.button("Plot").clicked() {
        app.render_chart();
    }
    if let Some(msg) = &app.compose_warning {
        ui.colored_label(ui.visuals().warn_fg_color, msg);
    }
}
