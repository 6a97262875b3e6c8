// src/main.rs
use fontpick::{apply_font, ask_font, ChooserConfig};
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Button, Label, Orientation};
use tracing_subscriber::EnvFilter;

const CHOSEN_PREFIX: &str = "Chosen font: ";

fn main() -> glib::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = Application::builder()
        .application_id("com.example.fontpick")
        .build();

    app.connect_activate(|app| {
        let window = ApplicationWindow::builder()
            .application(app)
            .title("Fontpick")
            .build();

        let column = gtk4::Box::new(Orientation::Vertical, 4);
        column.set_margin_top(10);
        column.set_margin_bottom(10);
        column.set_margin_start(10);
        column.set_margin_end(10);

        let label = Label::new(Some(CHOSEN_PREFIX));
        let button = Button::with_label("Font Chooser");
        column.append(&label);
        column.append(&button);
        window.set_child(Some(&column));

        let window_weak = window.downgrade();
        button.connect_clicked(move |_| {
            let Some(window) = window_weak.upgrade() else {
                return;
            };
            let label = label.clone();

            glib::MainContext::default().spawn_local(async move {
                let config = ChooserConfig::new()
                    .with_title("Choose a font")
                    .with_sample_text(&label.text());

                match ask_font(Some(&window), config).await {
                    Some(font) => {
                        tracing::info!("Chosen font: {}", font);
                        apply_font(&label, &font);
                        label.set_text(&format!("{CHOSEN_PREFIX}{font}"));
                    }
                    None => tracing::info!("Font chooser cancelled"),
                }
            });
        });

        window.present();
    });

    app.run()
}
