//! TUI application state.
//!
//! The `App` owns the loaded catalog, the three panels and the focus grid.
//! Resolution happens synchronously here; the HTTP call is handed back to
//! the runner as a `FetchJob` so the event loop never waits on the network.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::grid::{Direction, NavigationGrid};
use super::panel::{ListPanel, Panel, PanelKind, ResponsePanel};
use crate::client::FetchResponse;
use crate::config::{Catalog, GroupEntry};
use crate::errors::TurlError;
use crate::resolve::ResolvedRequest;

/// Grid layout: lists on top, the response panel spanning the bottom row.
const GRID: [[PanelKind; 2]; 2] = [
    [PanelKind::Groups, PanelKind::Requests],
    [PanelKind::Response, PanelKind::Response],
];

/// A fetch the runner should perform.
#[derive(Debug, Clone)]
pub struct FetchJob {
    pub id: u64,
    pub request: ResolvedRequest,
    pub cancel: CancellationToken,
}

/// The result of a `FetchJob`, sent back to the app.
#[derive(Debug)]
pub struct FetchOutcome {
    pub id: u64,
    pub request: ResolvedRequest,
    pub result: Result<FetchResponse, TurlError>,
}

/// The TUI application state.
pub struct App {
    catalog: Catalog,
    group_entries: Vec<GroupEntry>,
    groups: ListPanel,
    requests: ListPanel,
    response: ResponsePanel,
    grid: NavigationGrid<PanelKind>,
    /// Group index and request name of the last started request
    last_request: Option<(usize, String)>,
    in_flight: Option<(u64, CancellationToken)>,
    next_id: u64,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let group_entries = catalog.list_endpoint_groups();

        let mut groups = ListPanel::new("Groups");
        groups.set_items(group_entries.iter().map(|g| g.label.clone()).collect());

        let status_message = match catalog.failures().len() {
            0 => None,
            1 => Some(catalog.failures()[0].error.to_string()),
            n => Some(format!("Skipped {} config files that failed to parse", n)),
        };

        let mut app = Self {
            catalog,
            group_entries,
            groups,
            requests: ListPanel::new("Requests"),
            response: ResponsePanel::default(),
            grid: NavigationGrid::new(GRID.iter().map(|row| row.to_vec()).collect()),
            last_request: None,
            in_flight: None,
            next_id: 0,
            status_message,
            should_quit: false,
        };
        app.reload_requests();
        app.update_focus();
        app
    }

    pub fn focus(&self) -> PanelKind {
        self.grid.current().unwrap_or(PanelKind::Groups)
    }

    fn panel_mut(&mut self, kind: PanelKind) -> &mut dyn Panel {
        match kind {
            PanelKind::Groups => &mut self.groups,
            PanelKind::Requests => &mut self.requests,
            PanelKind::Response => &mut self.response,
        }
    }

    pub fn groups(&self) -> &ListPanel {
        &self.groups
    }

    pub fn requests(&self) -> &ListPanel {
        &self.requests
    }

    pub fn response(&self) -> &ResponsePanel {
        &self.response
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move focus across the grid.
    pub fn navigate(&mut self, direction: Direction) {
        if self.grid.navigate(direction) {
            self.update_focus();
        }
    }

    /// Move the selection in the focused list, or scroll the response.
    pub fn scroll_focused(&mut self, delta: isize) {
        let focus = self.focus();
        self.panel_mut(focus).scroll_by(delta);
        if focus == PanelKind::Groups {
            self.reload_requests();
        }
    }

    /// Enter: open a group, or resolve and fetch a request.
    pub fn activate(&mut self) -> Option<FetchJob> {
        match self.focus() {
            PanelKind::Groups => {
                if self.grid.focus(PanelKind::Requests) {
                    self.update_focus();
                }
                None
            }
            PanelKind::Requests => {
                let group = self.groups.selected_index()?;
                let name = self.requests.selected()?.to_string();
                self.start_request(group, name)
            }
            PanelKind::Response => None,
        }
    }

    /// Run the last started request again.
    pub fn rerun(&mut self) -> Option<FetchJob> {
        let (group, name) = self.last_request.clone()?;
        self.start_request(group, name)
    }

    fn start_request(&mut self, group: usize, name: String) -> Option<FetchJob> {
        let entry = self.group_entries.get(group)?.clone();
        self.last_request = Some((group, name.clone()));

        let request = match self.catalog.resolve(&entry, &name) {
            Ok(request) => request,
            Err(e) => {
                debug!(request = %name, error = %e, "Resolution failed");
                self.cancel_in_flight();
                self.response.show_error(name, format!("Error: {}", e));
                self.status_message = Some(e.to_string());
                return None;
            }
        };

        self.cancel_in_flight();

        let id = self.next_id;
        self.next_id += 1;
        let cancel = CancellationToken::new();
        self.in_flight = Some((id, cancel.clone()));

        self.response.show(
            format!("{} {}", request.method, request.url),
            "Loading...",
        );
        self.status_message = Some(format!("Fetching {}", request.url));

        Some(FetchJob { id, request, cancel })
    }

    /// Apply a finished fetch. Results of superseded fetches are dropped.
    pub fn finish_fetch(&mut self, outcome: FetchOutcome) {
        match self.in_flight {
            Some((id, _)) if id == outcome.id => self.in_flight = None,
            _ => return,
        }

        let heading = format!("{} {}", outcome.request.method, outcome.request.url);
        match outcome.result {
            Ok(response) => {
                self.status_message = Some(format!("{}: {}", outcome.request.name, response.status_line()));
                self.response.show(
                    format!("{} [{}]", heading, response.status_line()),
                    response.display_body(),
                );
            }
            Err(TurlError::Cancelled) => {
                self.status_message = Some("Request cancelled".to_string());
            }
            Err(e) => {
                self.status_message = Some(e.to_string());
                self.response.show_error(heading, format!("Error: {}", e));
            }
        }
    }

    /// Stop the app, cancelling any in-flight fetch.
    pub fn quit(&mut self) {
        self.cancel_in_flight();
        self.should_quit = true;
    }

    fn cancel_in_flight(&mut self) {
        if let Some((_, cancel)) = self.in_flight.take() {
            cancel.cancel();
        }
    }

    fn reload_requests(&mut self) {
        let items = self
            .groups
            .selected_index()
            .and_then(|i| self.group_entries.get(i))
            .map(|entry| self.catalog.list_requests(entry))
            .unwrap_or_default();
        self.requests.set_items(items);
    }

    /// Only the panel at the grid position is focused.
    fn update_focus(&mut self) {
        let focus = self.focus();
        for kind in self.grid.items() {
            self.panel_mut(kind).set_focused(kind == focus);
        }
    }
}
