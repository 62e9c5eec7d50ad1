// src/ui/widgets/mod.rs

pub mod analysis_view;   // Per-header findings with a detail pane.
pub mod footer;          // Key hints and the latest notice.
pub mod headers_view;    // Raw response headers with filters.
pub mod help_popup;      // Key bindings and scoring rules.
pub mod input;           // The target URL input.
pub mod issues_view;     // Issues and recommendations lists.
pub mod raw_view;        // Body of a full response.
pub mod report_view;     // Tab bar and dispatch to the views above.
pub mod settings_popup;  // Settings form.
pub mod summary;         // Score, grade and counts.
