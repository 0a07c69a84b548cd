use std::time::Duration;

use eframe::egui;

use super::{
    editable_card::SaveRequest,
    error_modal::ErrorModal,
    message_overlay::MessageOverlay,
    page_view::{
        self,
        PageViewState,
    },
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::Theme,
};
use crate::{
    content::{
        api,
        document::decode_document,
        ContentStore,
        HttpTransport,
        PageCache,
    },
    core::{
        tasks::{
            types::PageLoadResult,
            TaskManager,
            TaskResult,
        },
        EditableField,
        PageContentRecord,
        PageDocument,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub const PAGE_KEY: &str = "retrospective";

pub enum PageState {
    Loading,
    Ready { record: PageContentRecord, document: PageDocument },
    Failed(String),
}

/// Folds a load result into the page state. A failure only replaces the page
/// when nothing good is on screen yet; a failed refresh keeps the last loaded
/// content and hands the reason back so the caller can surface it.
fn apply_page_load(
    page: &mut PageState,
    page_key: &str,
    result: PageLoadResult,
) -> Option<String> {
    let showing_page = matches!(page, PageState::Ready { .. });

    match result {
        Ok(record) => match decode_document(&record.content) {
            Ok(document) => {
                *page = PageState::Ready { record, document };
                None
            }
            Err(e) => {
                // A payload we cannot parse must never be replaced by a
                // default document: the next save would overwrite whatever
                // the store holds.
                eprintln!("Stored payload for '{}' is malformed: {}", page_key, e);
                let detail = format!("Stored page content could not be decoded: {}", e);
                if showing_page {
                    Some(detail)
                } else {
                    *page = PageState::Failed(detail);
                    None
                }
            }
        },
        Err(e) => {
            eprintln!("Loading page '{}' failed: {}", page_key, e);
            if showing_page {
                Some(e)
            } else {
                *page = PageState::Failed("Error loading page content".to_string());
                None
            }
        }
    }
}

pub struct RetroApp {
    settings: SettingsData,
    store: ContentStore<HttpTransport>,
    task_manager: TaskManager,

    page: PageState,
    view: PageViewState,
    save_in_flight: Option<EditableField>,
    load_in_flight: bool,

    theme: Theme,
    overlay: MessageOverlay,
    error_modal: ErrorModal,
}

impl RetroApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);

        let mut error_modal = ErrorModal::new();
        if let Err(e) = api::validate_server_url(&settings.server_url) {
            eprintln!("{}", e);
            error_modal.show_error(
                "Server URL is invalid",
                format!(
                    "Requests to '{}' will fail until the settings file is fixed.",
                    settings.server_url
                ),
                Some(e.to_string()),
            );
        }

        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        let store = ContentStore::new(
            HttpTransport::new(settings.server_url.clone()),
            PageCache::shared(),
        );

        let task_manager = TaskManager::new();
        task_manager.load_page(store.clone(), PAGE_KEY.to_string());

        Self {
            settings,
            store,
            task_manager,
            page: PageState::Loading,
            view: PageViewState::new(),
            save_in_flight: None,
            load_in_flight: true,
            theme: Theme::sky(),
            overlay: MessageOverlay::new(),
            error_modal,
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::PageLoaded { page_key, result } => {
                // Reset before the key check so a stray result can't leave
                // the repaint loop running.
                self.load_in_flight = false;

                if page_key != PAGE_KEY {
                    return;
                }

                self.overlay.clear_message();

                if let Some(detail) = apply_page_load(&mut self.page, &page_key, result) {
                    self.error_modal.show_error(
                        "Couldn't refresh the page",
                        "Showing the last loaded content.",
                        Some(detail),
                    );
                }
            }
            TaskResult::FieldSaved { page_key, field, result } => {
                self.save_in_flight = None;

                match result {
                    Ok(()) => {
                        match field {
                            EditableField::Intro => self.view.intro_card.finish_save(),
                            EditableField::Placeholder => self.view.placeholder_card.finish_save(),
                        }

                        // The cache entry was invalidated on success, so
                        // this load re-fetches the saved document.
                        self.load_in_flight = true;
                        self.task_manager.load_page(self.store.clone(), page_key);
                    }
                    Err(e) => {
                        // Cache and displayed content are untouched; the
                        // card keeps its draft so the user can save again.
                        self.error_modal.show_error(
                            "Couldn't save your changes",
                            format!("The {} field was not updated. Check the connection and save again.", field.name()),
                            Some(e),
                        );
                    }
                }
            }
        }
    }

    fn request_save(&mut self, request: SaveRequest) {
        match EditableField::from_name(request.field_id) {
            Ok(field) => {
                self.save_in_flight = Some(field);
                self.task_manager.save_field(
                    self.store.clone(),
                    PAGE_KEY.to_string(),
                    field,
                    request.text,
                );
            }
            Err(e) => {
                self.error_modal.show_error(
                    "Couldn't save your changes",
                    e.to_string(),
                    None::<String>,
                );
            }
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Retroboard").strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.settings.dark_mode { "☀ Light" } else { "🌙 Dark" };
                    if ui.small_button(label).clicked() {
                        self.settings.dark_mode = !self.settings.dark_mode;
                        ctx.set_theme(if self.settings.dark_mode {
                            egui::Theme::Dark
                        } else {
                            egui::Theme::Light
                        });

                        if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
                            eprintln!("Failed to save settings: {}", e);
                        }
                    }
                });
            });
        });
    }
}

impl eframe::App for RetroApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.top_bar(ctx);
        self.error_modal.show(ctx);

        let saving = self.save_in_flight.is_some();
        let mut pending_save: Option<SaveRequest> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match &self.page {
                    PageState::Loading => {
                        // The overlay carries the spinner; keep the panel empty.
                    }
                    PageState::Failed(message) => {
                        ui.add_space(40.0);
                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new("⚠").size(28.0));
                            ui.label(message);
                        });
                    }
                    PageState::Ready { record, document } => {
                        pending_save = page_view::page_body(
                            ui,
                            &mut self.view,
                            record,
                            document,
                            &self.theme,
                            saving,
                        );
                    }
                }
            });
        });

        if let Some(request) = pending_save {
            self.request_save(request);
        }

        self.overlay.show(ctx);

        // Task results arrive over a polled channel; keep frames coming
        // while anything is in flight.
        if self.load_in_flight || self.save_in_flight.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{"intro":{"content":"old"},"placeholder":"p"}"#;

    fn record(content: &str) -> PageContentRecord {
        PageContentRecord {
            slug: PAGE_KEY.to_string(),
            title: "Retrospective".to_string(),
            content: content.to_string(),
            updated_at: None,
        }
    }

    fn ready_state() -> PageState {
        let record = record(PAYLOAD);
        let document = decode_document(&record.content).unwrap();
        PageState::Ready { record, document }
    }

    #[test]
    fn initial_load_failure_shows_the_error_state() {
        let mut page = PageState::Loading;

        let detail = apply_page_load(&mut page, PAGE_KEY, Err("connection refused".to_string()));

        assert!(detail.is_none());
        assert!(matches!(page, PageState::Failed(_)));
    }

    #[test]
    fn failed_refresh_keeps_the_last_good_page() {
        let mut page = ready_state();

        let detail = apply_page_load(&mut page, PAGE_KEY, Err("connection refused".to_string()));

        assert_eq!(detail.as_deref(), Some("connection refused"));
        match &page {
            PageState::Ready { document, .. } => assert_eq!(document.intro.content, "old"),
            _ => panic!("last loaded page was discarded"),
        }
    }

    #[test]
    fn malformed_refresh_keeps_the_last_good_page() {
        let mut page = ready_state();

        let detail = apply_page_load(&mut page, PAGE_KEY, Ok(record("not json")));

        assert!(detail.is_some());
        assert!(matches!(page, PageState::Ready { .. }));
    }

    #[test]
    fn malformed_initial_load_shows_the_error_state() {
        let mut page = PageState::Loading;

        let detail = apply_page_load(&mut page, PAGE_KEY, Ok(record("not json")));

        assert!(detail.is_none());
        assert!(matches!(page, PageState::Failed(_)));
    }

    #[test]
    fn successful_refresh_replaces_the_page() {
        let mut page = ready_state();
        let updated = PAYLOAD.replace("\"old\"", "\"new\"");

        let detail = apply_page_load(&mut page, PAGE_KEY, Ok(record(&updated)));

        assert!(detail.is_none());
        match &page {
            PageState::Ready { document, .. } => assert_eq!(document.intro.content, "new"),
            _ => panic!("expected the refreshed page"),
        }
    }
}
