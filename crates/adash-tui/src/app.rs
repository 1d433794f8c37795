//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Each of the four record
//! views is a [`PageState`] — the same query machinery instantiated for a
//! different record type — and the visible rows are recomputed from it on
//! every frame.

use crate::{
    commands::Command,
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        detail::{self, DetailPopup},
        help::HelpPopup,
        nav_tree::{NavTree, NavTreeState, TreeNode},
        record_table::{self, RecordTable, RecordTableState},
        search_bar::{SearchBar, SearchBarState},
        stat_cards::{StatCard, StatCards},
        tab_bar::{TabBar, TabEntry},
    },
};
use adash_core::{
    config::Config, count_by, export, session::Session, Categorized, Category, CategoryFilter,
    DocStatus, Document, Notification, Order, OrderStatus, Query, ReadState, Role, Searchable,
    User,
};
use adash_data::Dataset;
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::Line,
    Frame, Terminal,
};
use std::{io, path::PathBuf, time::Duration};

// ---------------------------------------------------------------------------
// Focus + view types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Nav,
    Table,
    Search,
    /// Vim-style `:` command line is active.
    Command,
}

/// The four record views, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Orders,
    Users,
    Documents,
    Notifications,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Orders,
        ViewKind::Users,
        ViewKind::Documents,
        ViewKind::Notifications,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Orders => "orders",
            ViewKind::Users => "users",
            ViewKind::Documents => "documents",
            ViewKind::Notifications => "notifications",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "orders" => Some(ViewKind::Orders),
            "users" => Some(ViewKind::Users),
            "documents" | "docs" => Some(ViewKind::Documents),
            "notifications" | "notifs" => Some(ViewKind::Notifications),
            _ => None,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// PageState — one record view
// ---------------------------------------------------------------------------

/// Everything one view owns: its records, the live search needle, the
/// applied category filter, and the table scroll state.
pub struct PageState<T: Searchable + Categorized> {
    pub records: Vec<T>,
    pub search: SearchBarState,
    pub filter: CategoryFilter<T::Category>,
    pub table: RecordTableState,
}

impl<T: Searchable + Categorized> PageState<T> {
    fn new(records: Vec<T>) -> Self {
        Self {
            records,
            search: SearchBarState::default(),
            filter: CategoryFilter::All,
            table: RecordTableState::default(),
        }
    }

    /// The combined query for the current needle + filter.
    pub fn query(&self) -> Query<T::Category> {
        Query::new(self.search.query.as_str(), self.filter)
    }

    /// The filtered view — recomputed on every call, never cached.
    pub fn visible(&self) -> Vec<&T> {
        self.query().filter(&self.records)
    }

    /// Does the view diverge from the raw collection?
    pub fn is_filtered(&self) -> bool {
        !self.search.query.is_empty() || !self.filter.is_all()
    }

    /// The record under the table cursor within the filtered view.
    fn selected(&self) -> Option<&T> {
        let visible = self.visible();
        self.table.selected(visible.len()).map(|i| visible[i])
    }
}

pub struct Pages {
    pub orders: PageState<Order>,
    pub users: PageState<User>,
    pub documents: PageState<Document>,
    pub notifications: PageState<Notification>,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub pages: Pages,
    pub active: ViewKind,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub nav: NavTreeState,
    pub theme: Theme,
    pub config: Config,
    pub session: Session,
    pub show_help: bool,
    pub show_detail: bool,
    pub command_bar: CommandBarState,
    /// Transient one-line feedback (export results, command errors).
    pub notice: Option<String>,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(dataset: Dataset, session: Session, config: Config, theme: Theme) -> Self {
        let active = ViewKind::from_name(&config.ui.default_view).unwrap_or(ViewKind::Orders);

        let state = AppState {
            pages: Pages {
                orders: PageState::new(dataset.orders),
                users: PageState::new(dataset.users),
                documents: PageState::new(dataset.documents),
                notifications: PageState::new(dataset.notifications),
            },
            active,
            focus: Focus::Nav,
            prev_focus: Focus::Nav,
            nav: build_nav(),
            theme,
            config,
            session,
            show_help: false,
            show_detail: false,
            command_bar: CommandBarState::default(),
            notice: None,
            quit: false,
        };

        App { state }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Detail popup likewise.
        if s.show_detail {
            match event {
                AppEvent::Escape | AppEvent::Enter | AppEvent::Quit => {
                    tracing::debug!("detail popup closed");
                    s.show_detail = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        // Any further interaction retires the last notice
        s.notice = None;

        match event {
            // Toggle help (only when not typing in the search bar)
            AppEvent::Char('?') if s.focus != Focus::Search => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Enter command mode with `:` (not from the search bar)
            AppEvent::Char(':') if s.focus != Focus::Search => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            // Direct view switching with 1–4
            AppEvent::Char(c @ '1'..='4') if s.focus != Focus::Search => {
                let idx = (c as u8 - b'1') as usize;
                s.active = ViewKind::ALL[idx];
                tracing::debug!(view = ?s.active, "view switched");
            }

            // Toggle read state on the focused notification
            AppEvent::Char('r')
                if s.focus == Focus::Table && s.active == ViewKind::Notifications =>
            {
                toggle_read(s);
            }

            // Apply the focused nav leaf
            AppEvent::Char(' ') if s.focus == Focus::Nav => {
                nav_activate(s);
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Return focus from the search bar
            AppEvent::Escape => {
                if s.focus == Focus::Search {
                    tracing::debug!("focus: Search -> Table");
                    s.focus = Focus::Table;
                }
            }

            // Tab-cycle focus: Nav → Table → Search → Nav
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Nav => Focus::Table,
                    Focus::Table => Focus::Search,
                    Focus::Search | Focus::Command => Focus::Nav,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            // Jump to the search bar
            AppEvent::SearchFocus => {
                tracing::debug!("focus -> Search");
                s.focus = Focus::Search;
            }

            // Filter cycling works regardless of focus
            AppEvent::FilterNext => cycle_filter(s, true),
            AppEvent::FilterPrev => cycle_filter(s, false),

            // Enter: apply a nav leaf, open a record detail, or leave the
            // search bar (its needle is applied live anyway)
            AppEvent::Enter => match s.focus {
                Focus::Nav => {
                    if s.nav.cursor_is_leaf() {
                        nav_activate(s);
                    } else {
                        s.nav.handle(&AppEvent::Enter);
                    }
                }
                Focus::Table => {
                    if visible_len(s, s.active) > 0 {
                        tracing::debug!("detail popup opened");
                        s.show_detail = true;
                    }
                }
                Focus::Search => {
                    s.focus = Focus::Table;
                }
                Focus::Command => {}
            },

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Search | Focus::Command)
}

// ---------------------------------------------------------------------------
// State helpers
// ---------------------------------------------------------------------------

/// Build the nav tree: one parent per view, its category values (plus the
/// `all` sentinel) as leaves.
fn build_nav() -> NavTreeState {
    fn view_node<C: Category>(view: &str) -> TreeNode {
        let mut children = vec![TreeNode::new(format!("{view}/all"), "all")];
        children.extend(
            C::VALUES
                .iter()
                .map(|v| TreeNode::new(format!("{view}/{v}"), v.to_string())),
        );
        TreeNode::new(view, view).with_children(children)
    }

    NavTreeState {
        nodes: vec![
            view_node::<OrderStatus>("orders"),
            view_node::<Role>("users"),
            view_node::<DocStatus>("documents"),
            view_node::<ReadState>("notifications"),
        ],
        cursor: 0,
        active: ViewKind::ALL
            .iter()
            .map(|v| format!("{}/all", v.title()))
            .collect(),
    }
}

fn visible_len(s: &AppState, view: ViewKind) -> usize {
    match view {
        ViewKind::Orders => s.pages.orders.visible().len(),
        ViewKind::Users => s.pages.users.visible().len(),
        ViewKind::Documents => s.pages.documents.visible().len(),
        ViewKind::Notifications => s.pages.notifications.visible().len(),
    }
}

fn filter_label(s: &AppState, view: ViewKind) -> String {
    match view {
        ViewKind::Orders => s.pages.orders.filter.to_string(),
        ViewKind::Users => s.pages.users.filter.to_string(),
        ViewKind::Documents => s.pages.documents.filter.to_string(),
        ViewKind::Notifications => s.pages.notifications.filter.to_string(),
    }
}

fn is_filtered(s: &AppState, view: ViewKind) -> bool {
    match view {
        ViewKind::Orders => s.pages.orders.is_filtered(),
        ViewKind::Users => s.pages.users.is_filtered(),
        ViewKind::Documents => s.pages.documents.is_filtered(),
        ViewKind::Notifications => s.pages.notifications.is_filtered(),
    }
}

/// Re-point the nav `●` marker at `view`'s applied filter.
fn sync_nav_marker(s: &mut AppState, view: ViewKind) {
    let label = filter_label(s, view);
    s.nav
        .set_active(view.title(), format!("{}/{}", view.title(), label));
}

/// Parse and apply a category filter by display name. Returns false when the
/// name is not a value of the view's category.
fn apply_filter_name(s: &mut AppState, view: ViewKind, value: &str) -> bool {
    fn parse_into<T: Searchable + Categorized>(page: &mut PageState<T>, value: &str) -> bool {
        match CategoryFilter::parse(value) {
            Some(filter) => {
                page.filter = filter;
                true
            }
            None => false,
        }
    }

    let applied = match view {
        ViewKind::Orders => parse_into(&mut s.pages.orders, value),
        ViewKind::Users => parse_into(&mut s.pages.users, value),
        ViewKind::Documents => parse_into(&mut s.pages.documents, value),
        ViewKind::Notifications => parse_into(&mut s.pages.notifications, value),
    };
    if applied {
        s.active = view;
        sync_nav_marker(s, view);
        tracing::debug!(view = ?view, filter = %value, "filter applied");
    }
    applied
}

/// Apply the nav leaf under the cursor (parents just toggle expansion).
fn nav_activate(s: &mut AppState) {
    let Some(id) = s.nav.cursor_id() else { return };
    match id.split_once('/') {
        Some((view_name, value)) => {
            if let Some(view) = ViewKind::from_name(view_name) {
                let value = value.to_string();
                apply_filter_name(s, view, &value);
            }
        }
        None => s.nav.handle(&AppEvent::Enter),
    }
}

/// Step the active view's category filter through its value cycle.
fn cycle_filter(s: &mut AppState, forward: bool) {
    fn step<T: Searchable + Categorized>(page: &mut PageState<T>, forward: bool) {
        page.filter = if forward {
            page.filter.next()
        } else {
            page.filter.prev()
        };
    }

    match s.active {
        ViewKind::Orders => step(&mut s.pages.orders, forward),
        ViewKind::Users => step(&mut s.pages.users, forward),
        ViewKind::Documents => step(&mut s.pages.documents, forward),
        ViewKind::Notifications => step(&mut s.pages.notifications, forward),
    }
    sync_nav_marker(s, s.active);
    tracing::debug!(view = ?s.active, filter = %filter_label(s, s.active), "filter cycled");
}

/// Flip the read flag on the notification under the table cursor.
fn toggle_read(s: &mut AppState) {
    let page = &mut s.pages.notifications;
    let id = page.selected().map(|n| n.id.clone());
    if let Some(id) = id {
        if let Some(notif) = page.records.iter_mut().find(|n| n.id == id) {
            notif.read = !notif.read;
            tracing::debug!(id = %notif.id, read = notif.read, "notification toggled");
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit | Command::Exit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = match name.to_ascii_lowercase().as_str() {
                "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Theme::load_gruvbox_dark(),
                _ => Theme::load_default(),
            };
        }
        Command::Dates => {
            s.config.ui.show_dates = !s.config.ui.show_dates;
        }
        Command::View(view) => {
            s.active = view;
        }
        Command::Filter(value) => {
            if !apply_filter_name(s, s.active, &value) {
                s.notice = Some(format!("unknown filter value: {value}"));
            }
        }
        Command::Export(path) => export_active_view(s, path),
        Command::ReadAll => {
            let marked = s
                .pages
                .notifications
                .records
                .iter_mut()
                .filter(|n| !n.read)
                .map(|n| n.read = true)
                .count();
            tracing::debug!(marked, "all notifications marked read");
            s.notice = Some(format!("marked {marked} notifications read"));
        }
    }
}

/// Write the active view's filtered records as JSON.
fn export_active_view(s: &mut AppState, path: Option<PathBuf>) {
    if !s.session.is_admin() {
        s.notice = Some("export requires an admin session".to_string());
        return;
    }
    let path = path.unwrap_or_else(|| PathBuf::from(&s.config.export.default_path));
    let pretty = s.config.export.pretty;

    let result = match s.active {
        ViewKind::Orders => {
            let rows = s.pages.orders.visible();
            export::export_to_file(&path, &rows, pretty).map(|_| rows.len())
        }
        ViewKind::Users => {
            let rows = s.pages.users.visible();
            export::export_to_file(&path, &rows, pretty).map(|_| rows.len())
        }
        ViewKind::Documents => {
            let rows = s.pages.documents.visible();
            export::export_to_file(&path, &rows, pretty).map(|_| rows.len())
        }
        ViewKind::Notifications => {
            let rows = s.pages.notifications.visible();
            export::export_to_file(&path, &rows, pretty).map(|_| rows.len())
        }
    };

    s.notice = Some(match result {
        Ok(count) => {
            tracing::info!(count, path = %path.display(), "view exported");
            format!("exported {count} records to {}", path.display())
        }
        Err(err) => format!("export failed: {err}"),
    });
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Nav => s.nav.handle(&event),
        Focus::Table => match s.active {
            ViewKind::Orders => s.pages.orders.table.handle(&event),
            ViewKind::Users => s.pages.users.table.handle(&event),
            ViewKind::Documents => s.pages.documents.table.handle(&event),
            ViewKind::Notifications => s.pages.notifications.table.handle(&event),
        },
        Focus::Search => match s.active {
            ViewKind::Orders => s.pages.orders.search.handle(&event),
            ViewKind::Users => s.pages.users.search.handle(&event),
            ViewKind::Documents => s.pages.documents.search.handle(&event),
            ViewKind::Notifications => s.pages.notifications.search.handle(&event),
        },
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line tab bar | 3-line stat cards | body | 3-line search bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    // Horizontal body split: nav pane | record table
    let pct = state.config.ui.nav_pane_width_pct;
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
        .split(vert[2]);

    let tabs: Vec<TabEntry> = ViewKind::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| TabEntry {
            label: format!("{}:{}", i + 1, view.title()),
            filtered: is_filtered(state, *view),
        })
        .collect();
    frame.render_widget(
        TabBar::new(
            &tabs,
            state.active.index(),
            &state.theme,
            &state.session.user().email,
        )
        .notice(state.notice.as_deref()),
        vert[0],
    );

    frame.render_widget(
        NavTree::new(&state.nav, state.focus == Focus::Nav, &state.theme),
        horiz[0],
    );

    draw_active_view(frame, state, vert[1], horiz[1], vert[3]);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return; // cursor is set; skip search-bar cursor below
    }

    // Position the terminal cursor when the search bar is focused
    if state.focus == Focus::Search {
        let (cx, cy) = match state.active {
            ViewKind::Orders => {
                SearchBar::new(&state.pages.orders.search, true, &state.theme)
                    .cursor_position(vert[3])
            }
            ViewKind::Users => SearchBar::new(&state.pages.users.search, true, &state.theme)
                .cursor_position(vert[3]),
            ViewKind::Documents => {
                SearchBar::new(&state.pages.documents.search, true, &state.theme)
                    .cursor_position(vert[3])
            }
            ViewKind::Notifications => {
                SearchBar::new(&state.pages.notifications.search, true, &state.theme)
                    .cursor_position(vert[3])
            }
        };
        frame.set_cursor_position((cx, cy));
    }
}

/// Render stat cards, the record table, the search bar, and (when open) the
/// detail popup for the active view.
fn draw_active_view(
    frame: &mut Frame,
    state: &AppState,
    cards_area: Rect,
    table_area: Rect,
    search_area: Rect,
) {
    let theme = &state.theme;
    let ui = &state.config.ui;

    match state.active {
        ViewKind::Orders => {
            let page = &state.pages.orders;
            let cards = vec![
                StatCard::new("total", page.records.len(), theme.badge_muted),
                StatCard::new(
                    "pending",
                    count_by(&page.records, OrderStatus::Pending),
                    theme.badge_warning,
                ),
                StatCard::new(
                    "processing",
                    count_by(&page.records, OrderStatus::Processing),
                    theme.badge_primary,
                ),
                StatCard::new(
                    "delivered",
                    count_by(&page.records, OrderStatus::Delivered),
                    theme.badge_success,
                ),
            ];
            draw_page(
                frame,
                state,
                page,
                cards,
                record_table::order_header(),
                |order, needle| record_table::order_row(order, theme, needle, ui),
                |order| {
                    (
                        format!("order {}", order.id),
                        detail::order_detail(order, theme, ui),
                    )
                },
                cards_area,
                table_area,
                search_area,
            );
        }
        ViewKind::Users => {
            let page = &state.pages.users;
            let cards = vec![
                StatCard::new("total", page.records.len(), theme.badge_muted),
                StatCard::new(
                    "admins",
                    count_by(&page.records, Role::Admin),
                    theme.badge_danger,
                ),
                StatCard::new(
                    "moderators",
                    count_by(&page.records, Role::Moderator),
                    theme.badge_warning,
                ),
                StatCard::new(
                    "members",
                    count_by(&page.records, Role::User),
                    theme.badge_primary,
                ),
            ];
            draw_page(
                frame,
                state,
                page,
                cards,
                record_table::user_header(),
                |user, needle| record_table::user_row(user, theme, needle, ui),
                |user| (user.name.clone(), detail::user_detail(user, theme, ui)),
                cards_area,
                table_area,
                search_area,
            );
        }
        ViewKind::Documents => {
            let page = &state.pages.documents;
            let cards = vec![
                StatCard::new("total", page.records.len(), theme.badge_muted),
                StatCard::new(
                    "active",
                    count_by(&page.records, DocStatus::Active),
                    theme.badge_success,
                ),
                StatCard::new(
                    "archived",
                    count_by(&page.records, DocStatus::Archived),
                    theme.badge_muted,
                ),
            ];
            draw_page(
                frame,
                state,
                page,
                cards,
                record_table::document_header(),
                |doc, needle| record_table::document_row(doc, theme, needle, ui),
                |doc| (doc.name.clone(), detail::document_detail(doc, theme, ui)),
                cards_area,
                table_area,
                search_area,
            );
        }
        ViewKind::Notifications => {
            let page = &state.pages.notifications;
            let cards = vec![
                StatCard::new("total", page.records.len(), theme.badge_muted),
                StatCard::new(
                    "unread",
                    count_by(&page.records, ReadState::Unread),
                    theme.badge_warning,
                ),
                StatCard::new(
                    "read",
                    count_by(&page.records, ReadState::Read),
                    theme.badge_muted,
                ),
            ];
            draw_page(
                frame,
                state,
                page,
                cards,
                record_table::notification_header(),
                |notif, needle| record_table::notification_row(notif, theme, needle, ui),
                |notif| {
                    (
                        notif.title.clone(),
                        detail::notification_detail(notif, theme),
                    )
                },
                cards_area,
                table_area,
                search_area,
            );
        }
    }
}

/// The per-view rendering shared by all four record types.
#[allow(clippy::too_many_arguments)]
fn draw_page<T: Searchable + Categorized>(
    frame: &mut Frame,
    state: &AppState,
    page: &PageState<T>,
    cards: Vec<StatCard>,
    header: Line<'static>,
    row: impl Fn(&T, &str) -> Line<'static>,
    detail_of: impl Fn(&T) -> (String, Vec<Line<'static>>),
    cards_area: Rect,
    table_area: Rect,
    search_area: Rect,
) {
    let query = page.query();
    let needle_lower = query.needle().to_lowercase();
    let visible = query.filter(&page.records);

    frame.render_widget(StatCards::new(cards, &state.theme), cards_area);

    let rows: Vec<Line<'static>> = visible.iter().map(|r| row(r, &needle_lower)).collect();
    frame.render_widget(
        RecordTable::new(&page.table, state.focus == Focus::Table, &state.theme)
            .title(format!(" {} ", state.active.title()))
            .header(header)
            .rows(rows),
        table_area,
    );

    frame.render_widget(
        SearchBar::new(&page.search, state.focus == Focus::Search, &state.theme).context(
            page.filter.to_string(),
            visible.len(),
            page.records.len(),
        ),
        search_area,
    );

    if state.show_detail {
        if let Some(idx) = page.table.selected(visible.len()) {
            let (title, lines) = detail_of(visible[idx]);
            let whole = frame.area();
            frame.render_widget(DetailPopup::new(title, lines, &state.theme), whole);
        }
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let dataset = Dataset::seed();
        let session = Session::sign_in(&dataset.users, "alisher@email.com").unwrap();
        App::new(dataset, session, Config::defaults(), Theme::load_default())
    }

    fn non_admin_app() -> App {
        let dataset = Dataset::seed();
        let session = Session::sign_in(&dataset.users, "jasur@email.com").unwrap();
        App::new(dataset, session, Config::defaults(), Theme::load_default())
    }

    #[test]
    fn focus_cycles_through_the_three_panes() {
        let mut app = app();
        assert_eq!(app.state.focus, Focus::Nav);
        app.handle(AppEvent::FocusNext);
        assert_eq!(app.state.focus, Focus::Table);
        app.handle(AppEvent::FocusNext);
        assert_eq!(app.state.focus, Focus::Search);
        app.handle(AppEvent::FocusNext);
        assert_eq!(app.state.focus, Focus::Nav);
    }

    #[test]
    fn number_keys_switch_views() {
        let mut app = app();
        app.handle(AppEvent::Char('3'));
        assert_eq!(app.state.active, ViewKind::Documents);
        app.handle(AppEvent::Char('1'));
        assert_eq!(app.state.active, ViewKind::Orders);
    }

    #[test]
    fn typing_in_the_search_bar_narrows_the_view() {
        let mut app = app();
        app.handle(AppEvent::SearchFocus);
        for c in "mali".chars() {
            app.handle(AppEvent::Char(c));
        }
        let visible = app.state.pages.orders.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "ORD-002");
    }

    #[test]
    fn filter_cycling_moves_the_nav_marker() {
        let mut app = app();
        app.handle(AppEvent::FilterNext);
        assert_eq!(
            app.state.pages.orders.filter,
            CategoryFilter::Only(OrderStatus::Pending)
        );
        assert!(app
            .state
            .nav
            .active
            .contains(&"orders/pending".to_string()));
        app.handle(AppEvent::FilterPrev);
        assert!(app.state.pages.orders.filter.is_all());
        assert!(app.state.nav.active.contains(&"orders/all".to_string()));
    }

    #[test]
    fn filter_command_applies_to_the_active_view() {
        let mut app = app();
        execute_command(&mut app.state, Command::Filter("delivered".into()));
        let visible = app.state.pages.orders.visible();
        assert_eq!(visible.len(), 2);
        assert!(visible
            .iter()
            .all(|o| o.status == OrderStatus::Delivered));
    }

    #[test]
    fn unknown_filter_value_surfaces_a_notice() {
        let mut app = app();
        execute_command(&mut app.state, Command::Filter("misplaced".into()));
        assert!(app.state.notice.as_deref().unwrap().contains("misplaced"));
        assert!(app.state.pages.orders.filter.is_all());
    }

    #[test]
    fn read_all_marks_every_notification() {
        let mut app = app();
        execute_command(&mut app.state, Command::ReadAll);
        assert!(app
            .state
            .pages
            .notifications
            .records
            .iter()
            .all(|n| n.read));
        // The unread filter now matches nothing
        app.state.pages.notifications.filter = CategoryFilter::Only(ReadState::Unread);
        assert!(app.state.pages.notifications.visible().is_empty());
    }

    #[test]
    fn toggling_read_flips_the_focused_notification() {
        let mut app = app();
        app.state.active = ViewKind::Notifications;
        app.state.focus = Focus::Table;
        let before = app.state.pages.notifications.records[0].read;
        app.handle(AppEvent::Char('r'));
        assert_eq!(app.state.pages.notifications.records[0].read, !before);
    }

    #[test]
    fn export_is_gated_on_an_admin_session() {
        let mut app = non_admin_app();
        execute_command(&mut app.state, Command::Export(None));
        assert!(app.state.notice.as_deref().unwrap().contains("admin"));
    }

    #[test]
    fn nav_enter_on_a_leaf_applies_the_filter_and_switches_view() {
        let mut app = app();
        // cursor to users/admin: orders(0) + all+5 statuses (1..=6), users(7),
        // users/all(8), users/admin(9)
        app.state.nav.cursor = 9;
        assert!(app.state.nav.cursor_is_leaf());
        app.handle(AppEvent::Enter);
        assert_eq!(app.state.active, ViewKind::Users);
        assert_eq!(
            app.state.pages.users.filter,
            CategoryFilter::Only(Role::Admin)
        );
    }
}
