//! Pencilmark desktop application using egui/eframe.

use pencilmark_app::PencilmarkApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.pencilmark";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((720.0, 800.0))
            .with_min_inner_size((360.0, 420.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Pencilmark",
        options,
        Box::new(|cc| Ok(Box::new(PencilmarkApp::new(cc)))),
    )
}
