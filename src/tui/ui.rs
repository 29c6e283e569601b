use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};

use crate::core::{NavigationController, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ScreenView, StatusBar, TabBar, TabLabel};
use crate::tui::container::{ContainerSink, DemoScreen};

pub type Navigator = NavigationController<DemoScreen, ContainerSink>;

/// Builds the tab strip props from the controller.
pub fn tab_bar(nav: &Navigator) -> TabBar {
    let tabs = nav
        .tab_ids()
        .iter()
        .map(|id| TabLabel {
            icon: nav.tab(id).map(|t| t.icon.clone()).unwrap_or_default(),
            label: id.to_string(),
        })
        .collect();
    let active = nav
        .active_tab()
        .and_then(|active| nav.tab_ids().iter().position(|id| id == active));
    TabBar::new(tabs, active)
}

/// Splits the frame into tab strip (possibly empty), content and status line.
pub fn layout(area: Rect, tabs_visible: bool) -> [Rect; 3] {
    use Constraint::{Length, Min};
    let tab_height = if tabs_visible { 1 } else { 0 };
    Layout::vertical([Length(tab_height), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, nav: &Navigator, tui: &mut TuiState) {
    let [tab_area, content_area, status_area] = layout(frame.area(), nav.is_content_visible());
    tui.tab_bar_area = if nav.is_content_visible() {
        Some(tab_area)
    } else {
        None
    };

    if nav.is_content_visible() {
        tab_bar(nav).render(frame, tab_area);
    }

    match nav.renderer().displayed() {
        Some(displayed) => {
            let breadcrumb: Vec<String> = nav
                .active_tab()
                .and_then(|tab| nav.tab(tab).ok())
                .map(|entry| entry.stack.iter().map(|s| s.title.clone()).collect())
                .unwrap_or_default();
            let screen = &displayed.screen;
            ScreenView {
                title: screen.title.clone(),
                body: screen.body.clone(),
                breadcrumb,
                extras: screen.extras().cloned(),
                last_result: screen.last_result,
            }
            .render(frame, content_area);
        }
        None => {
            frame.render_widget(
                Paragraph::new("Nothing rendered yet.").block(Block::bordered()),
                content_area,
            );
        }
    }

    let tab = nav.active_tab().map(|t| t.to_string()).unwrap_or_default();
    let depth = nav.active_tab().and_then(|t| nav.depth(t).ok()).unwrap_or(0);
    StatusBar {
        tab,
        depth,
        transition: nav.renderer().active_transition(),
        status_message: tui.status_message.clone(),
    }
    .render(frame, status_area);
}
