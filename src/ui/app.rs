//! Application state and business logic

use ratatui::widgets::ListState;
use uuid::Uuid;

use crate::config::Config;
use crate::filter::FilterMode;
use crate::icons::IconService;
use crate::store::{EditOutcome, TaskStore};
use crate::task::Task;
use crate::theme::{Theme, ThemeManager, ThemePersistence};
use crate::validate::{self, TaskField};

/// Application state
///
/// Everything the UI mutates lives here and is passed explicitly into the
/// event handlers and render functions; there are no module-level singletons.
pub struct App {
    pub should_quit: bool,
    pub store: TaskStore,
    pub filter_mode: FilterMode,
    pub search_query: String,
    pub searching: bool,
    pub theme: ThemeManager<Box<dyn ThemePersistence>>,
    pub icons: IconService,

    pub task_list_state: ListState,
    pub selected_task_index: usize,

    // Task creation dialog
    pub creating_task: bool,
    pub new_task_description: String,
    pub new_task_due_date: String,
    pub new_task_due_time: String,
    pub new_task_focus: TaskField,

    // Task edit dialog
    pub editing_task: bool,
    pub edit_task_id: Option<Uuid>,
    pub edit_task_description: String,

    // Overlays
    pub error_message: Option<String>,
    pub show_help: bool,
    pub help_scroll_offset: usize,
}

impl App {
    /// Create a new App instance with the persisted theme already applied
    #[must_use]
    pub fn new(config: &Config, theme_store: Box<dyn ThemePersistence>) -> Self {
        let mut task_list_state = ListState::default();
        task_list_state.select(Some(0));

        Self {
            should_quit: false,
            store: TaskStore::new(),
            filter_mode: config.ui.default_filter,
            search_query: String::new(),
            searching: false,
            theme: ThemeManager::load(theme_store),
            icons: IconService::new(config.ui.icon_theme),
            task_list_state,
            selected_task_index: 0,
            creating_task: false,
            new_task_description: String::new(),
            new_task_due_date: String::new(),
            new_task_due_time: String::new(),
            new_task_focus: TaskField::Description,
            editing_task: false,
            edit_task_id: None,
            edit_task_description: String::new(),
            error_message: None,
            show_help: false,
            help_scroll_offset: 0,
        }
    }

    /// Recompute visibility for every task and keep the selection in bounds.
    /// Triggered by inserts, status toggles, filter changes and query changes.
    pub fn apply_filters(&mut self) {
        self.store.apply_filters(self.filter_mode, &self.search_query);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let visible = self.store.visible_count();
        if visible == 0 {
            self.selected_task_index = 0;
        } else if self.selected_task_index >= visible {
            self.selected_task_index = visible - 1;
        }
        self.task_list_state.select(Some(self.selected_task_index));
    }

    /// Id of the task currently under the cursor, if any is visible
    #[must_use]
    pub fn selected_task_id(&self) -> Option<Uuid> {
        self.store
            .visible_tasks()
            .nth(self.selected_task_index)
            .map(|task| task.id)
    }

    /// Move the cursor to the next visible task
    pub fn next_task(&mut self) {
        let visible = self.store.visible_count();
        if visible > 0 && self.selected_task_index + 1 < visible {
            self.selected_task_index += 1;
        }
        self.task_list_state.select(Some(self.selected_task_index));
    }

    /// Move the cursor to the previous visible task
    pub fn previous_task(&mut self) {
        self.selected_task_index = self.selected_task_index.saturating_sub(1);
        self.task_list_state.select(Some(self.selected_task_index));
    }

    // --- Task creation ---

    /// Open the add-task dialog with empty fields
    pub fn open_task_creation(&mut self) {
        self.creating_task = true;
        self.new_task_focus = TaskField::Description;
    }

    /// Close the add-task dialog, keeping whatever was typed
    pub fn cancel_task_creation(&mut self) {
        self.creating_task = false;
    }

    /// Move focus to the next field in the add-task dialog
    pub fn cycle_new_task_focus(&mut self) {
        self.new_task_focus = match self.new_task_focus {
            TaskField::Description => TaskField::DueDate,
            TaskField::DueDate => TaskField::DueTime,
            TaskField::DueTime => TaskField::Description,
        };
    }

    fn new_task_buffer_mut(&mut self) -> &mut String {
        match self.new_task_focus {
            TaskField::Description => &mut self.new_task_description,
            TaskField::DueDate => &mut self.new_task_due_date,
            TaskField::DueTime => &mut self.new_task_due_time,
        }
    }

    pub fn add_char_to_new_task(&mut self, c: char) {
        self.new_task_buffer_mut().push(c);
    }

    pub fn remove_char_from_new_task(&mut self) {
        self.new_task_buffer_mut().pop();
    }

    /// Validate the form and admit the task.
    ///
    /// On rejection no state is mutated: the dialog stays open, the reason is
    /// shown in the error modal, and focus moves to the offending field. On
    /// success the task is inserted (store resorts), visibility is
    /// recomputed, and the form is cleared.
    pub fn submit_new_task(&mut self) {
        if let Err(reason) = validate::validate_new_task(
            &self.new_task_description,
            &self.new_task_due_date,
            &self.new_task_due_time,
        ) {
            log::debug!("task rejected: {reason}");
            self.error_message = Some(reason.to_string());
            self.new_task_focus = reason.focus_field();
            return;
        }

        let task = Task::new(
            &self.new_task_description,
            &self.new_task_due_date,
            &self.new_task_due_time,
        );
        log::info!("task added: {} due_at={}", task.description, task.due_at);
        self.store.insert(task);
        self.apply_filters();

        self.new_task_description.clear();
        self.new_task_due_date.clear();
        self.new_task_due_time.clear();
        self.new_task_focus = TaskField::Description;
        self.creating_task = false;
    }

    // --- Task editing ---

    /// Open the edit dialog for the selected task, pre-filled with its
    /// current description
    pub fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if let Some(task) = self.store.get(id) {
            self.edit_task_description = task.description.clone();
            self.edit_task_id = Some(id);
            self.editing_task = true;
        }
    }

    /// Resolve the edit prompt.
    ///
    /// `None` means the prompt was cancelled: the task is left exactly as it
    /// was and that is not an error. Empty-after-trim input is rejected with
    /// a message, prior description kept. Otherwise the trimmed text replaces
    /// the description.
    pub fn submit_edit_response(&mut self, response: Option<&str>) {
        self.editing_task = false;
        let Some(id) = self.edit_task_id.take() else {
            return;
        };

        let Some(new_text) = response else {
            log::debug!("edit cancelled");
            self.edit_task_description.clear();
            return;
        };

        match self.store.edit_description(id, new_text) {
            EditOutcome::Applied => {
                log::info!("task edited");
                // Description feeds the search haystack
                self.apply_filters();
            }
            EditOutcome::RejectedEmpty => {
                log::debug!("edit rejected: empty description");
                self.error_message = Some("Task cannot be empty.".to_string());
            }
            EditOutcome::NotFound => {}
        }
        self.edit_task_description.clear();
    }

    // --- Task operations ---

    /// Flip the selected task between pending and completed
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Some(status) = self.store.toggle_status(id) {
                log::debug!("task toggled to {status:?}");
                self.apply_filters();
            }
        }
    }

    /// Delete the selected task, regardless of its status
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if self.store.remove(id).is_some() {
                log::info!("task deleted");
            }
            self.clamp_selection();
        }
    }

    /// Remove every completed task in one sweep
    pub fn delete_completed(&mut self) {
        let removed = self.store.delete_completed();
        if removed > 0 {
            log::info!("deleted {removed} completed tasks");
        }
        self.clamp_selection();
    }

    // --- Filter / search ---

    /// Advance the filter mode (all -> pending -> completed)
    pub fn cycle_filter(&mut self) {
        self.filter_mode = self.filter_mode.next();
        self.apply_filters();
    }

    pub fn start_search(&mut self) {
        self.searching = true;
    }

    /// Leave search input mode; the query stays in effect
    pub fn stop_search(&mut self) {
        self.searching = false;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.apply_filters();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.apply_filters();
    }

    // --- Theme ---

    /// Flip the theme and persist the new preference
    pub fn toggle_theme(&mut self) {
        match self.theme.toggle() {
            Ok(theme) => log::info!("theme switched to {}", theme.as_str()),
            Err(e) => self.error_message = Some(format!("Failed to save theme: {e}")),
        }
    }

    /// Glyph for the theme toggle control: sun while dark, moon while light
    #[must_use]
    pub fn theme_icon(&self) -> &'static str {
        match self.theme.current() {
            Theme::Dark => self.icons.theme_dark(),
            Theme::Light => self.icons.theme_light(),
        }
    }
}
