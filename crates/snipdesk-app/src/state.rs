//! Application state (Model in TEA pattern)
//!
//! The in-memory model is the single source of truth: the view renders it and
//! persistence serializes it. Blocks and cards are addressed by ids allocated
//! at creation time.

use chrono::{DateTime, Utc};
use snipdesk_core::{
    CollapseState, Manifest, Snippet, SnippetRecord, Thumbnail, Tutorial, TutorialRecord,
    WorkspaceSnapshot,
};

use crate::config::Settings;

// ─────────────────────────────────────────────────────────────────────────────
// Tabs
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Snippets,
    Tutorials,
}

impl Tab {
    /// Tabs in button order
    pub const ALL: [Tab; 2] = [Tab::Snippets, Tab::Tutorials];

    /// Stable DOM id of the panel
    pub fn id(self) -> &'static str {
        match self {
            Tab::Snippets => "snippets",
            Tab::Tutorials => "tutorials",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Snippets => "Code Snippets",
            Tab::Tutorials => "Video Tutorials",
        }
    }

    pub fn first() -> Tab {
        Self::ALL[0]
    }

    pub fn last() -> Tab {
        Self::ALL[Self::ALL.len() - 1]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Code Blocks
// ─────────────────────────────────────────────────────────────────────────────

/// Identifier of a rendered code block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u64);

/// Whether a block's source text has arrived
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BlockLoad {
    /// Waiting for the snippet file fetch
    Loading { file: String },
    #[default]
    Ready,
}

/// A rendered snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub id: BlockId,
    pub snippet: Snippet,
    /// Manifest category; `None` for snippets added through the form
    pub category: Option<String>,
    pub load: BlockLoad,
    pub collapse: CollapseState,
    /// Copy button shows "Copied!" while set
    pub copied: bool,
}

impl CodeBlock {
    pub fn is_ready(&self) -> bool {
        self.load == BlockLoad::Ready
    }

    pub fn copy_label(&self) -> &'static str {
        if self.copied {
            "Copied!"
        } else {
            "Copy"
        }
    }
}

/// One manifest category and its blocks, in manifest order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSection {
    pub name: String,
    pub blocks: Vec<CodeBlock>,
}

/// A snippet file the view must fetch for a Loading block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetFileRequest {
    pub block: BlockId,
    pub file: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tutorials
// ─────────────────────────────────────────────────────────────────────────────

/// Identifier of a rendered tutorial card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TutorialId(pub u64);

/// A rendered tutorial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialCard {
    pub id: TutorialId,
    pub tutorial: Tutorial,
    /// `None` renders the "Invalid video URL" placeholder
    pub embed_url: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// The single toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Increases with every toast; dismissals for older ids are ignored
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

// ─────────────────────────────────────────────────────────────────────────────
// Forms
// ─────────────────────────────────────────────────────────────────────────────

/// Thumbnail chosen in the add-snippet form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormThumbnail {
    /// Tags the file read so a result for an older pick can be told apart
    pub selection: u64,
    pub file_name: String,
    /// Filled in once the file has been read
    pub data_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetFormState {
    pub title: String,
    pub language: String,
    pub code: String,
    pub thumbnail: Option<FormThumbnail>,
}

impl SnippetFormState {
    /// "Selected: <file>" label under the file input
    pub fn thumbnail_label(&self) -> String {
        match &self.thumbnail {
            Some(thumb) if !thumb.file_name.is_empty() => format!("Selected: {}", thumb.file_name),
            _ => String::new(),
        }
    }
}

/// A submitted snippet waiting for its thumbnail read to finish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSnippet {
    pub selection: u64,
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorialFormState {
    pub title: String,
    pub duration: String,
    pub url: String,
    pub description: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Startup progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Initializing,
    LoadingManifest,
    Ready,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Default)]
pub struct AppState {
    pub settings: Settings,
    pub phase: LoadPhase,
    pub active_tab: Tab,

    /// Manifest categories, replaced wholesale by each manifest load
    pub sections: Vec<SnippetSection>,
    /// Snippets added through the form, rendered after the sections
    pub added: Vec<CodeBlock>,
    pub tutorials: Vec<TutorialCard>,

    pub notification: Option<Notification>,
    /// Thumbnail shown in the full-viewport modal
    pub enlarged: Option<Thumbnail>,

    pub snippet_form: SnippetFormState,
    /// Form submissions held until their thumbnail has been read
    pub pending_snippets: Vec<PendingSnippet>,
    pub tutorial_form: TutorialFormState,

    /// When the workspace was last written to storage
    pub last_saved: Option<DateTime<Utc>>,

    next_block_id: u64,
    next_tutorial_id: u64,
    next_notification_id: u64,
    next_selection_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    fn collapse_threshold(&self) -> usize {
        self.settings.ui.collapse_threshold
    }

    fn alloc_block_id(&mut self) -> BlockId {
        self.next_block_id += 1;
        BlockId(self.next_block_id)
    }

    fn alloc_tutorial_id(&mut self) -> TutorialId {
        self.next_tutorial_id += 1;
        TutorialId(self.next_tutorial_id)
    }

    // ─────────────────────────────────────────────────────────
    // Snippet Form
    // ─────────────────────────────────────────────────────────

    /// Replace the form's thumbnail with a new pick, or clear it.
    /// Returns the selection id its file read must report back with.
    pub fn select_form_thumbnail(&mut self, file_name: Option<String>) -> Option<u64> {
        self.snippet_form.thumbnail = file_name.map(|file_name| {
            self.next_selection_id += 1;
            FormThumbnail {
                selection: self.next_selection_id,
                file_name,
                data_url: None,
            }
        });
        self.form_thumbnail_selection()
    }

    /// Selection id of the thumbnail currently in the form
    pub fn form_thumbnail_selection(&self) -> Option<u64> {
        self.snippet_form.thumbnail.as_ref().map(|t| t.selection)
    }

    // ─────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────

    pub fn show_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    // ─────────────────────────────────────────────────────────
    // Code blocks
    // ─────────────────────────────────────────────────────────

    /// All blocks in render order: manifest sections first, then added ones
    pub fn blocks(&self) -> impl Iterator<Item = &CodeBlock> {
        self.sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .chain(self.added.iter())
    }

    fn blocks_mut(&mut self) -> impl Iterator<Item = &mut CodeBlock> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.blocks.iter_mut())
            .chain(self.added.iter_mut())
    }

    pub fn block(&self, id: BlockId) -> Option<&CodeBlock> {
        self.blocks().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut CodeBlock> {
        self.blocks_mut().find(|b| b.id == id)
    }

    /// Append a user snippet after everything already rendered
    pub fn add_snippet(&mut self, snippet: Snippet) -> BlockId {
        let id = self.alloc_block_id();
        let collapse = CollapseState::for_code(&snippet.code, self.collapse_threshold());
        self.added.push(CodeBlock {
            id,
            snippet,
            category: None,
            load: BlockLoad::Ready,
            collapse,
            copied: false,
        });
        id
    }

    /// Replace every manifest section with fresh Loading blocks.
    ///
    /// Added snippets are kept. Returns the files to fetch, in manifest order.
    pub fn replace_sections(&mut self, manifest: &Manifest) -> Vec<SnippetFileRequest> {
        self.sections.clear();
        let mut requests = Vec::with_capacity(manifest.snippet_count());

        for category in &manifest.categories {
            let mut blocks = Vec::with_capacity(category.snippets.len());
            for entry in &category.snippets {
                let id = self.alloc_block_id();
                requests.push(SnippetFileRequest {
                    block: id,
                    file: entry.file.clone(),
                });
                blocks.push(CodeBlock {
                    id,
                    snippet: Snippet::new(&entry.title, &entry.language, ""),
                    category: Some(category.name.clone()),
                    load: BlockLoad::Loading {
                        file: entry.file.clone(),
                    },
                    collapse: CollapseState::default(),
                    copied: false,
                });
            }
            self.sections.push(SnippetSection {
                name: category.name.clone(),
                blocks,
            });
        }

        requests
    }

    /// Fill in a Loading block with its fetched source. Returns false if the
    /// block no longer exists.
    pub fn fill_block(&mut self, id: BlockId, code: String) -> bool {
        let threshold = self.collapse_threshold();
        match self.block_mut(id) {
            Some(block) => {
                block.collapse = CollapseState::for_code(&code, threshold);
                block.snippet.code = code;
                block.load = BlockLoad::Ready;
                true
            }
            None => false,
        }
    }

    /// Drop a block entirely. Returns the removed block.
    pub fn remove_block(&mut self, id: BlockId) -> Option<CodeBlock> {
        for section in &mut self.sections {
            if let Some(pos) = section.blocks.iter().position(|b| b.id == id) {
                return Some(section.blocks.remove(pos));
            }
        }
        let pos = self.added.iter().position(|b| b.id == id)?;
        Some(self.added.remove(pos))
    }

    /// Number of blocks still waiting for their file
    pub fn pending_blocks(&self) -> usize {
        self.blocks().filter(|b| !b.is_ready()).count()
    }

    /// Collapse every long ready block that has no control yet.
    /// Returns how many blocks changed.
    pub fn auto_collapse_code_blocks(&mut self) -> usize {
        let threshold = self.collapse_threshold();
        self.blocks_mut()
            .filter(|b| b.load == BlockLoad::Ready)
            .map(|b| b.collapse.auto_collapse(&b.snippet.code, threshold))
            .filter(|changed| *changed)
            .count()
    }

    // ─────────────────────────────────────────────────────────
    // Tutorials
    // ─────────────────────────────────────────────────────────

    pub fn add_tutorial(&mut self, tutorial: Tutorial) -> TutorialId {
        let id = self.alloc_tutorial_id();
        let embed_url = tutorial.embed_url();
        self.tutorials.push(TutorialCard {
            id,
            tutorial,
            embed_url,
        });
        id
    }

    pub fn tutorial(&self, id: TutorialId) -> Option<&TutorialCard> {
        self.tutorials.iter().find(|t| t.id == id)
    }

    pub fn tutorial_mut(&mut self, id: TutorialId) -> Option<&mut TutorialCard> {
        self.tutorials.iter_mut().find(|t| t.id == id)
    }

    // ─────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────

    /// Show a toast, replacing any current one. Returns its id.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notification = Some(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    pub fn notify_success(&mut self, message: impl Into<String>) -> u64 {
        self.notify(message, NotificationKind::Success)
    }

    pub fn notify_error(&mut self, message: impl Into<String>) -> u64 {
        self.notify(message, NotificationKind::Error)
    }

    /// Hide the toast if it is still the one with `id`
    pub fn dismiss_notification(&mut self, id: u64) -> bool {
        if self.notification.as_ref().is_some_and(|n| n.id == id) {
            self.notification = None;
            true
        } else {
            false
        }
    }

    // ─────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────

    /// Build the persisted form of the workspace from the model.
    /// Blocks still loading are skipped.
    pub fn snapshot(&self, saved_at: DateTime<Utc>) -> WorkspaceSnapshot {
        let mut snapshot = WorkspaceSnapshot::new(saved_at);
        snapshot.snippets = self
            .blocks()
            .filter(|b| b.is_ready())
            .map(|b| SnippetRecord::from_snippet(&b.snippet, b.category.as_deref()))
            .collect();
        snapshot.tutorials = self
            .tutorials
            .iter()
            .map(|card| TutorialRecord::from(&card.tutorial))
            .collect();
        snapshot
    }

    /// Rebuild user-added snippets and tutorials from a snapshot.
    ///
    /// Manifest snippets are skipped; the manifest supplies them again.
    /// Returns (snippets, tutorials) restored.
    pub fn restore(&mut self, snapshot: &WorkspaceSnapshot) -> (usize, usize) {
        let mut snippets = 0;
        for record in snapshot.user_snippets() {
            self.add_snippet(record.to_snippet());
            snippets += 1;
        }
        for record in &snapshot.tutorials {
            self.add_tutorial(Tutorial::from(record));
        }
        (snippets, snapshot.tutorials.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use snipdesk_core::Manifest;

    fn manifest() -> Manifest {
        Manifest::from_json(
            r#"{"categories":[
                {"name":"Rust","snippets":[
                    {"title":"Hello","language":"rust","file":"a.rs"},
                    {"title":"World","language":"rust","file":"b.rs"}]},
                {"name":"Web","snippets":[
                    {"title":"Page","language":"html","file":"c.html"}]}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_tab_ids_and_order() {
        assert_eq!(Tab::first(), Tab::Snippets);
        assert_eq!(Tab::last(), Tab::Tutorials);
        assert_eq!(Tab::Tutorials.id(), "tutorials");
    }

    #[test]
    fn test_show_tab_activates_exactly_one() {
        let mut state = AppState::new();
        state.show_tab(Tab::Tutorials);
        let active: Vec<_> = Tab::ALL.into_iter().filter(|t| state.is_active(*t)).collect();
        assert_eq!(active, vec![Tab::Tutorials]);
    }

    #[test]
    fn test_add_snippet_allocates_unique_ids() {
        let mut state = AppState::new();
        let a = state.add_snippet(Snippet::new("Same", "js", "1"));
        let b = state.add_snippet(Snippet::new("Same", "js", "1"));
        assert_ne!(a, b);
        assert_eq!(state.added.len(), 2);
    }

    #[test]
    fn test_replace_sections_keeps_added_blocks() {
        let mut state = AppState::new();
        let added = state.add_snippet(Snippet::new("Mine", "js", "x"));

        let requests = state.replace_sections(&manifest());
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[2].file, "c.html");
        assert_eq!(state.sections.len(), 2);
        assert!(state.block(added).is_some());
        assert_eq!(state.pending_blocks(), 3);

        // A second load replaces, it does not append
        state.replace_sections(&manifest());
        assert_eq!(state.sections.len(), 2);
        assert_eq!(state.blocks().count(), 4);
    }

    #[test]
    fn test_render_order_is_sections_then_added() {
        let mut state = AppState::new();
        state.add_snippet(Snippet::new("Mine", "js", "x"));
        state.replace_sections(&manifest());

        let titles: Vec<_> = state.blocks().map(|b| b.snippet.title.as_str()).collect();
        assert_eq!(titles, vec!["Hello", "World", "Page", "Mine"]);
    }

    #[test]
    fn test_fill_and_remove_block() {
        let mut state = AppState::new();
        let requests = state.replace_sections(&manifest());

        assert!(state.fill_block(requests[0].block, "l\n".repeat(30)));
        let block = state.block(requests[0].block).unwrap();
        assert!(block.is_ready());
        assert!(block.collapse.collapsed);

        assert!(state.remove_block(requests[1].block).is_some());
        assert!(state.block(requests[1].block).is_none());
        assert!(!state.fill_block(requests[1].block, "late".into()));
    }

    #[test]
    fn test_auto_collapse_counts_changes_once() {
        let mut state = AppState::new();
        state.settings.ui.collapse_threshold = 100;
        state.add_snippet(Snippet::new("Long", "js", "l\n".repeat(50)));
        state.add_snippet(Snippet::new("Short", "js", "l"));

        state.settings.ui.collapse_threshold = 20;
        assert_eq!(state.auto_collapse_code_blocks(), 1);
        assert_eq!(state.auto_collapse_code_blocks(), 0);
    }

    #[test]
    fn test_dismiss_ignores_stale_ids() {
        let mut state = AppState::new();
        let first = state.notify_success("one");
        let second = state.notify_error("two");

        assert!(!state.dismiss_notification(first));
        assert_eq!(state.notification.as_ref().unwrap().id, second);
        assert!(state.dismiss_notification(second));
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_snapshot_skips_loading_blocks() {
        let mut state = AppState::new();
        let requests = state.replace_sections(&manifest());
        state.fill_block(requests[0].block, "fn main() {}".into());
        state.add_snippet(Snippet::new("Mine", "js", "x"));

        let at = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let snapshot = state.snapshot(at);
        let titles: Vec<_> = snapshot.snippets.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Hello", "Mine"]);
        assert_eq!(snapshot.snippets[0].category.as_deref(), Some("Rust"));
        assert_eq!(snapshot.saved_at, Some(at));
    }

    #[test]
    fn test_snippet_form_thumbnail_label() {
        let mut form = SnippetFormState::default();
        assert_eq!(form.thumbnail_label(), "");
        form.thumbnail = Some(FormThumbnail {
            selection: 1,
            file_name: "shot.png".into(),
            data_url: None,
        });
        assert_eq!(form.thumbnail_label(), "Selected: shot.png");
    }

    #[test]
    fn test_each_thumbnail_pick_gets_a_new_selection() {
        let mut state = AppState::new();
        let first = state.select_form_thumbnail(Some("a.png".into())).unwrap();
        let second = state.select_form_thumbnail(Some("a.png".into())).unwrap();
        assert_ne!(first, second);
        assert_eq!(state.form_thumbnail_selection(), Some(second));

        assert_eq!(state.select_form_thumbnail(None), None);
        assert!(state.snippet_form.thumbnail.is_none());
    }
}
