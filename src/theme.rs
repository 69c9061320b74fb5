use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition { css: LIGHT_THEME },
        ThemeMode::Dark => ThemeDefinition { css: DARK_THEME },
    }
}

/// Layout rules shared by both themes; injected once by the app shell.
pub const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: -apple-system, "Segoe UI", sans-serif; }
.widget-shell { display: flex; flex-direction: column; height: 100vh; max-width: 640px; margin: 0 auto; border: 1px solid var(--color-border); }
.widget-header { padding: 0.75rem 1rem; border-bottom: 1px solid var(--color-border); font-weight: 600; }
.chat-list { flex: 1; overflow-y: auto; padding: 1rem; display: flex; flex-direction: column; gap: 0.75rem; }
.message-row { display: flex; }
.message-row.user { justify-content: flex-end; }
.message-stack { display: flex; flex-direction: column; gap: 0.25rem; max-width: 85%; }
.bubble { padding: 0.6rem 0.9rem; border-radius: 1rem; white-space: pre-wrap; }
.bubble.user { background: var(--color-chat-user-bg); color: var(--color-chat-user-text); }
.bubble.assistant { background: var(--color-chat-assistant-bg); color: var(--color-chat-assistant-text); }
.message-timestamp { font-size: 0.7rem; color: var(--color-timestamp); }
.align-end { align-self: flex-end; }
.loading-dots { display: inline-flex; gap: 0.3rem; padding: 0.4rem 0; }
.loading-dots .dot { width: 0.4rem; height: 0.4rem; border-radius: 50%; background: var(--color-timestamp); animation: pulse 1s infinite alternate; }
.loading-dots .dot:nth-child(2) { animation-delay: 0.2s; }
.loading-dots .dot:nth-child(3) { animation-delay: 0.4s; }
@keyframes pulse { from { opacity: 0.3; } to { opacity: 1; } }
.composer { border-top: 1px solid var(--color-border); padding: 0.75rem 1rem; display: flex; flex-direction: column; gap: 0.5rem; }
.input-group { display: flex; gap: 0.5rem; }
.input-group input { flex: 1; padding: 0.55rem 0.75rem; border: 1px solid var(--color-input-border); border-radius: 0.5rem; background: var(--color-input-bg); color: var(--color-text-primary); }
.btn-primary { padding: 0.55rem 1.1rem; border: none; border-radius: 0.5rem; background: var(--color-accent); color: #fff; cursor: pointer; }
.btn-primary:disabled { opacity: 0.5; cursor: default; }
.quick-replies, .suggested-questions { display: flex; flex-wrap: wrap; gap: 0.4rem; }
.chip { padding: 0.35rem 0.7rem; border: 1px solid var(--color-border); border-radius: 999px; background: transparent; color: var(--color-text-primary); font-size: 0.8rem; cursor: pointer; }
.chip:hover { background: var(--color-surface-muted); }
.carousel { margin-top: 0.5rem; border: 1px solid var(--color-border); border-radius: 0.5rem; overflow: hidden; }
.carousel img { width: 100%; display: block; }
.carousel-caption { padding: 0.4rem 0.6rem; font-size: 0.8rem; color: var(--color-text-muted); }
.carousel-dots { display: flex; justify-content: center; gap: 0.35rem; padding: 0.4rem 0; }
.carousel-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; border: none; background: var(--color-input-border); cursor: pointer; padding: 0; }
.carousel-dot.active { background: var(--color-accent); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-text-primary: #111111;
    --color-text-muted: #4a4a4a;
    --color-border: #d9d9d9;
    --color-surface-muted: #f0f0f0;
    --color-input-border: #c2c2c2;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #2563eb;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #f2f2f2;
    --color-chat-assistant-text: #111111;
    --color-timestamp: #8a8a8a;
    --color-accent: #2563eb;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b0b0f;
    --color-text-primary: #f2f2f2;
    --color-text-muted: #b5b5b5;
    --color-border: #2a2a32;
    --color-surface-muted: #1a1a22;
    --color-input-border: #33333d;
    --color-input-bg: #12121a;
    --color-chat-user-bg: #3b82f6;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #1a1a22;
    --color-chat-assistant-text: #f2f2f2;
    --color-timestamp: #7a7a85;
    --color-accent: #3b82f6;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;
