//! # Transitions and the render sink
//!
//! The core never draws anything. It hands the screen due for display to a
//! [`RenderSink`] together with the [`Transition`] to use.
//!
//! ```text
//! Transition   enter          exit
//! ──────────   ─────────────  ──────────────
//! None         -              -
//! Forward      SlideLeftIn    SlideRightOut
//! Backward     SlideRightIn   SlideRightOut
//! ```

/// Visual effect applied when the rendered screen is swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    None,
    Forward,
    Backward,
}

/// A single slide animation, named after the resource the host plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    SlideLeftIn,
    SlideRightIn,
    SlideRightOut,
    StayStill,
}

impl Animation {
    /// The exit animation paired with an enter animation.
    pub fn complementary(self) -> Animation {
        match self {
            Animation::SlideLeftIn => Animation::SlideRightOut,
            _ => Animation::StayStill,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Animation::SlideLeftIn => "slide-left-in",
            Animation::SlideRightIn => "slide-right-in",
            Animation::SlideRightOut => "slide-right-out",
            Animation::StayStill => "stay-still",
        }
    }
}

impl Transition {
    /// Enter/exit animation pair, or `None` for an unanimated swap.
    pub fn animations(self) -> Option<(Animation, Animation)> {
        match self {
            Transition::None => None,
            Transition::Forward => Some((
                Animation::SlideLeftIn,
                Animation::SlideLeftIn.complementary(),
            )),
            Transition::Backward => Some((Animation::SlideRightIn, Animation::SlideRightOut)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Transition::None => "none",
            Transition::Forward => "forward",
            Transition::Backward => "backward",
        }
    }
}

/// Receives "render screen S into the visible container" requests.
///
/// Rendering is synchronous from the core's point of view: the request is
/// complete when `render` returns. The sink only ever sees `&S`, so it cannot
/// call back into the controller mid-operation.
pub trait RenderSink<S> {
    fn render(&mut self, screen: &S, transition: Transition);
}

impl<S, F> RenderSink<S> for F
where
    F: FnMut(&S, Transition),
{
    fn render(&mut self, screen: &S, transition: Transition) {
        self(screen, transition)
    }
}
