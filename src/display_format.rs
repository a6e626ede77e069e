use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Copy, Clone)]
pub struct DisplayFormat {
    pub unicode: bool,
    pub effects: bool,
    pub concise: bool,
}

static DEFAULT_UNICODE: AtomicBool = AtomicBool::new(true);
static DEFAULT_EFFECTS: AtomicBool = AtomicBool::new(true);

impl DisplayFormat {
    pub fn default(concise: bool) -> Self {
        Self {
            unicode: DEFAULT_UNICODE.load(Ordering::Relaxed),
            effects: DEFAULT_EFFECTS.load(Ordering::Relaxed),
            concise,
        }
    }

    pub fn pretty() -> Self {
        Self::default(false)
    }

    pub fn string() -> Self {
        Self {
            effects: false,
            ..Self::default(true)
        }
    }

    pub fn with_concise(&self, concise: bool) -> Self {
        Self { concise, ..*self }
    }

    pub fn set_default_unicode(unicode: bool) {
        DEFAULT_UNICODE.store(unicode, Ordering::Relaxed);
    }

    pub fn set_default_effects(effects: bool) {
        DEFAULT_EFFECTS.store(effects, Ordering::Relaxed);
    }
}
