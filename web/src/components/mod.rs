pub mod code_block;
pub mod notification;
pub mod snippet_form;
pub mod snippets;
pub mod tabs;
pub mod thumbnail;
pub mod tutorial_card;
pub mod tutorial_form;
pub mod tutorials;
