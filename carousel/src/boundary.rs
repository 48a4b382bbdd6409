//! Fault isolation for renderable subtrees.
//!
//! A [`FaultBoundary`] wraps a child renderer. The first fault the child raises (an `Err` or a
//! panic) is logged and latched; from then on the boundary renders a static [`Fallback`] and never
//! calls the child again. There is no retry: recovering means building a new boundary.

use std::borrow::Cow;
use std::error::Error as _;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::RenderFault;

pub const FALLBACK_TITLE: &str = "Something went wrong";
/// Points the user at the diagnostic log, which only exists with the `tracing` feature.
#[cfg(feature = "tracing")]
pub const FALLBACK_HINT: &str = "Please inspect the log output for more details.";
#[cfg(not(feature = "tracing"))]
pub const FALLBACK_HINT: &str = "Please report this problem to the site maintainers.";

/// Something that can render itself, possibly failing.
pub trait Render {
    type Output;

    fn render(&self) -> Result<Self::Output, RenderFault>;
}

impl<F, T> Render for F
where
    F: Fn() -> Result<T, RenderFault>,
{
    type Output = T;

    fn render(&self) -> Result<T, RenderFault> {
        self()
    }
}

/// Output of a [`FaultBoundary`] render pass.
#[derive(Clone, Debug, PartialEq)]
pub enum Rendered<T> {
    Content(T),
    Fallback(Fallback),
}

impl<T> Rendered<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn content(self) -> Option<T> {
        match self {
            Self::Content(content) => Some(content),
            Self::Fallback(_) => None,
        }
    }
}

/// The static display that replaces a faulted subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fallback {
    pub title: &'static str,
    /// String form of the fault.
    pub detail: String,
    pub hint: &'static str,
}

impl Fallback {
    pub fn for_fault(fault: &RenderFault) -> Self {
        Self {
            title: FALLBACK_TITLE,
            detail: fault.to_string(),
            hint: FALLBACK_HINT,
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.detail)?;
        write!(f, "{}", self.hint)
    }
}

/// A fault latched by a boundary, plus the context it was raised in.
#[derive(Debug)]
pub struct CapturedFault {
    fault: RenderFault,
    trace: Vec<String>,
}

impl CapturedFault {
    pub fn fault(&self) -> &RenderFault {
        &self.fault
    }

    /// The boundary label followed by the fault's `source()` chain, outermost first.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }
}

/// Wraps a child renderer and substitutes a [`Fallback`] once the child faults.
///
/// Faults are logged at error level only with the `tracing` feature. Without it the captured
/// fault is still available from [`FaultBoundary::fault`].
#[derive(Debug)]
pub struct FaultBoundary<C> {
    child: C,
    label: Cow<'static, str>,
    fault: Option<CapturedFault>,
}

impl<C: Render> FaultBoundary<C> {
    pub fn new(child: C) -> Self {
        Self {
            child,
            label: Cow::Borrowed("root"),
            fault: None,
        }
    }

    /// Names the boundary in fault traces.
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn child(&self) -> &C {
        &self.child
    }

    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    pub fn fault(&self) -> Option<&CapturedFault> {
        self.fault.as_ref()
    }

    /// Renders the child, or the fallback if it has faulted (now or earlier).
    pub fn render(&mut self) -> Rendered<C::Output> {
        if let Some(captured) = &self.fault {
            return Rendered::Fallback(Fallback::for_fault(&captured.fault));
        }

        let child = &self.child;
        let fault = match panic::catch_unwind(AssertUnwindSafe(|| child.render())) {
            Ok(Ok(output)) => return Rendered::Content(output),
            Ok(Err(fault)) => fault,
            Err(payload) => RenderFault::from_panic(&*payload),
        };

        let trace = self.trace_for(&fault);
        cerror!(
            boundary = %self.label,
            fault = %fault,
            trace = ?trace,
            "uncaught render fault"
        );
        let fallback = Fallback::for_fault(&fault);
        self.fault = Some(CapturedFault { fault, trace });
        Rendered::Fallback(fallback)
    }

    fn trace_for(&self, fault: &RenderFault) -> Vec<String> {
        let mut trace = vec![self.label.to_string()];
        let mut source = fault.source();
        while let Some(err) = source {
            trace.push(err.to_string());
            source = err.source();
        }
        trace
    }
}
