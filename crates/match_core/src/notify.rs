use std::time::Duration;

/// How long a toast stays fully visible.
pub const TOAST_VISIBLE_FOR: Duration = Duration::from_millis(3000);
/// Length of the fade-out before the toast is dropped.
pub const TOAST_FADE_FOR: Duration = Duration::from_millis(300);

pub const TOAST_TOP_PX: u32 = 20;
pub const TOAST_HEIGHT_PX: u32 = 56;
pub const TOAST_GAP_PX: u32 = 12;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// Background colour of the toast.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Error => "#ef4444",
            Severity::Info | Severity::Success => "#10b981",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Fading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    age: Duration,
}

impl Toast {
    pub fn phase(&self) -> ToastPhase {
        if self.age < TOAST_VISIBLE_FOR {
            ToastPhase::Visible
        } else {
            ToastPhase::Fading
        }
    }

    fn expired(&self) -> bool {
        self.age >= TOAST_VISIBLE_FOR + TOAST_FADE_FOR
    }
}

/// Active notifications, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastQueue {
    next_id: ToastId,
    active: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.active.push(Toast {
            id,
            message: message.into(),
            severity,
            age: Duration::ZERO,
        });
        id
    }

    /// Ages every toast and drops the ones whose fade has completed.
    /// Returns true when anything visible changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.active.is_empty() {
            return false;
        }
        let before: Vec<ToastPhase> = self.active.iter().map(Toast::phase).collect();
        for toast in &mut self.active {
            toast.age = toast.age.saturating_add(elapsed);
        }
        let len_before = self.active.len();
        self.active.retain(|toast| !toast.expired());
        if self.active.len() != len_before {
            return true;
        }
        self.active
            .iter()
            .zip(before)
            .any(|(toast, phase)| toast.phase() != phase)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Top offset in pixels of the toast at `index` in the stack.
pub fn stack_offset(index: usize) -> u32 {
    TOAST_TOP_PX + index as u32 * (TOAST_HEIGHT_PX + TOAST_GAP_PX)
}
