use indexmap::IndexMap;
use serde::Serialize;

use crate::page::identity::{selector_var, MethodSignature};
use crate::page::page_model::PageModel;
use crate::page::router::PageRouter;
use crate::project::project_model::ActionKind;
use crate::trace::trace::{TraceEvent, TraceKind};

/// Where a recorded step landed after interpretation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepPlacement {
    /// Page whose class owns the step's method
    pub page_name: String,

    /// Page type the method returns; equals `page_name` unless the step
    /// caused a redirect
    pub return_page_name: String,

    /// Action after the `verifyNot` override
    pub action: ActionKind,
}

/// Result of interpreting every script of a project.
#[derive(Debug, Clone)]
pub struct CompiledProject {
    pub pages: IndexMap<String, PageModel>,
    pub placements: IndexMap<String, StepPlacement>,
    pub url_page_map: IndexMap<String, String>,
    pub events: Vec<TraceEvent>,
}

/// All mutable state of one generation run.
///
/// Counters and tables live here instead of in globals so repeated runs are
/// isolated from each other.
#[derive(Debug)]
pub struct GenerationContext {
    pub router: PageRouter,
    pub pages: IndexMap<String, PageModel>,

    /// Signature → generated method name, shared by every test
    pub method_table: IndexMap<MethodSignature, String>,

    pub placements: IndexMap<String, StepPlacement>,

    selector_index: usize,
    events: Vec<TraceEvent>,
}

impl GenerationContext {
    /// Start a run. Every page named by the seed map gets a model up front,
    /// in seed order.
    pub fn new(seed: IndexMap<String, String>) -> Self {
        let mut ctx = Self {
            router: PageRouter::new(IndexMap::new()),
            pages: IndexMap::new(),
            method_table: IndexMap::new(),
            placements: IndexMap::new(),
            selector_index: 0,
            events: Vec::new(),
        };
        for (pattern, page_name) in &seed {
            ctx.ensure_page(page_name, pattern);
        }
        ctx.router = PageRouter::new(seed);
        ctx
    }

    /// Route a URL and make sure its page model exists.
    pub fn resolve_page(&mut self, url: &str) -> String {
        let route = self.router.resolve(url);
        self.ensure_page(&route.page_name, url);
        route.page_name
    }

    pub fn page(&self, name: &str) -> Option<&PageModel> {
        self.pages.get(name)
    }

    pub fn page_mut(&mut self, name: &str) -> &mut PageModel {
        self.pages
            .entry(name.to_string())
            .or_insert_with(|| PageModel::new(name))
    }

    /// Allocate the next run-wide selector variable name.
    pub fn next_selector_var(&mut self) -> String {
        let name = selector_var(self.selector_index);
        self.selector_index += 1;
        name
    }

    /// New trace event numbered after the ones already recorded.
    pub fn event(&self, kind: TraceKind, page: &str) -> TraceEvent {
        TraceEvent::new(self.events.len() as u64, kind, page)
    }

    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn finish(self) -> CompiledProject {
        CompiledProject {
            pages: self.pages,
            placements: self.placements,
            url_page_map: self.router.url_page_map().clone(),
            events: self.events,
        }
    }

    fn ensure_page(&mut self, name: &str, source: &str) {
        if !self.pages.contains_key(name) {
            self.pages.insert(name.to_string(), PageModel::new(name));
            let event = self.event(TraceKind::PageRegistered, name);
            self.push(event.with_detail(source));
        }
    }
}
