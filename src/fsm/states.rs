//! Concrete door state handlers and table builder.
//!
//! Each state is defined by plain `fn` pointers — no closures, no dynamic
//! dispatch, no heap.
//!
//! ```text
//!  CLOSED ──[open pressed]──▶ OPEN ──┐
//!    ▲                               │ [open pressed again]
//!    │                               ▼ (refresh timer, stay)
//!    └──[dark AND delay expired]── OPEN
//! ```
//!
//! There is no manual close: leaving Open requires darkness *and* an expired
//! grace window. The delay keeps the door from slamming shut right after it
//! opened, giving whoever pressed the button time to pass through even in
//! the dark.

use super::context::DoorContext;
use super::{StateDescriptor, StateId};
use crate::sounds::SoundPattern;
use log::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table. Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0 — Closed
        StateDescriptor {
            id: StateId::Closed,
            name: "Closed",
            on_enter: Some(closed_enter),
            on_exit: None,
            on_update: closed_update,
        },
        // Index 1 — Open
        StateDescriptor {
            id: StateId::Open,
            name: "Open",
            on_enter: Some(open_enter),
            on_exit: None,
            on_update: open_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  CLOSED state — rest state, boot state
// ═══════════════════════════════════════════════════════════════════════════

fn closed_enter(ctx: &mut DoorContext) {
    ctx.commands.door_angle = Some(ctx.config.door_closed_angle);
    ctx.commands.tone = Some(SoundPattern::DoorClose);
    info!("Door closed (servo -> {}°)", ctx.config.door_closed_angle);
}

fn closed_update(ctx: &mut DoorContext) -> Option<StateId> {
    if ctx.triggers.manual_open {
        return Some(StateId::Open);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  OPEN state — waiting for darkness + grace window to expire
// ═══════════════════════════════════════════════════════════════════════════

fn open_enter(ctx: &mut DoorContext) {
    ctx.commands.door_angle = Some(ctx.config.door_open_angle);
    ctx.commands.tone = Some(SoundPattern::DoorOpen);
    ctx.opened_at_ms = ctx.now_ms;
    info!(
        "Door opened (servo -> {}°), auto-close armed for {}ms of darkness",
        ctx.config.door_open_angle, ctx.config.auto_close_delay_ms
    );
}

fn open_update(ctx: &mut DoorContext) -> Option<StateId> {
    // A repeated press acts unconditionally: restart the grace window,
    // re-command the angle, and replay the confirmation tone.
    if ctx.triggers.manual_open {
        ctx.opened_at_ms = ctx.now_ms;
        ctx.commands.door_angle = Some(ctx.config.door_open_angle);
        ctx.commands.tone = Some(SoundPattern::DoorOpen);
        debug!("Door open re-pressed, grace window restarted");
    }

    // Hysteresis: darkness alone never closes; the grace window must have
    // strictly passed as well.
    if ctx.triggers.too_dark && ctx.ms_since_open() > ctx.config.auto_close_delay_ms as u64 {
        return Some(StateId::Closed);
    }

    None
}
