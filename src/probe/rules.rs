//! Ordered classification rules.
//!
//! Each axis is a fixed list of (predicate, label) pairs evaluated top to
//! bottom; the first match wins. Order is significant: a Cygwin context can
//! carry Windows signals too, and `__unix__` is present on every BSD.

use super::context::PlatformContext;
use super::label::{DistroLabel, KernelLabel};
use super::signal::Signal;

const BSD_SIGNALS: &[Signal] = &[
    Signal::DragonFly,
    Signal::FreeBsd,
    Signal::NetBsd,
    Signal::OpenBsd,
];

const WINDOWS_SIGNALS: &[Signal] = &[Signal::Win32, Signal::Cygwin];

/// A boolean test over a context.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// At least one of the signals is present.
    AnyOf(&'static [Signal]),
    /// At least one of `any` is present and every one of `all` is present.
    AnyWith {
        any: &'static [Signal],
        all: &'static [Signal],
    },
}

impl Predicate {
    pub fn matches(&self, ctx: &PlatformContext) -> bool {
        match self {
            Predicate::AnyOf(any) => ctx.has_any(any),
            Predicate::AnyWith { any, all } => {
                ctx.has_any(any) && all.iter().all(|s| ctx.has(*s))
            }
        }
    }
}

/// One row of a rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule<L> {
    pub when: Predicate,
    pub label: L,
}

pub const DISTRO_RULES: &[Rule<DistroLabel>] = &[
    Rule {
        when: Predicate::AnyOf(&[Signal::DragonFly]),
        label: DistroLabel::DragonFly,
    },
    Rule {
        when: Predicate::AnyOf(&[Signal::FreeBsd]),
        label: DistroLabel::FreeBsd,
    },
    Rule {
        when: Predicate::AnyOf(&[Signal::NetBsd]),
        label: DistroLabel::NetBsd,
    },
    Rule {
        when: Predicate::AnyOf(&[Signal::OpenBsd]),
        label: DistroLabel::OpenBsd,
    },
    Rule {
        when: Predicate::AnyOf(&[Signal::Cygwin]),
        label: DistroLabel::Cygwin,
    },
    Rule {
        when: Predicate::AnyOf(&[Signal::Mingw32]),
        label: DistroLabel::Mingw,
    },
    Rule {
        when: Predicate::AnyOf(&[Signal::Win32]),
        label: DistroLabel::MsWin,
    },
    Rule {
        when: Predicate::AnyOf(&[Signal::Linux]),
        label: DistroLabel::GenericLinux,
    },
];

pub const KERNEL_RULES: &[Rule<KernelLabel>] = &[
    Rule {
        when: Predicate::AnyOf(BSD_SIGNALS),
        label: KernelLabel::Bsd,
    },
    Rule {
        when: Predicate::AnyWith {
            any: WINDOWS_SIGNALS,
            all: &[Signal::Win32Winnt],
        },
        label: KernelLabel::WinNt,
    },
    Rule {
        when: Predicate::AnyOf(WINDOWS_SIGNALS),
        label: KernelLabel::Win32,
    },
    Rule {
        when: Predicate::AnyOf(&[Signal::Linux]),
        label: KernelLabel::Linux,
    },
    Rule {
        when: Predicate::AnyOf(&[Signal::Unix]),
        label: KernelLabel::Unix,
    },
];

/// Return the label of the first rule whose predicate matches.
pub fn first_match<L: Copy>(rules: &[Rule<L>], ctx: &PlatformContext) -> Option<L> {
    rules
        .iter()
        .find(|rule| rule.when.matches(ctx))
        .map(|rule| rule.label)
}
