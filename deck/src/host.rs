//! Browser binding for [`NavCore`].
//!
//! `Deck` owns the slide elements and optional navigation container, reads
//! live layout from the DOM on every request, and performs the core's
//! [`Action`]s with smooth scrolling. A missing or detached element turns the
//! affected behavior into a no-op; nothing here returns an error.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
    Window,
};

use crate::clock::SystemClock;
use crate::config::NavConfig;
use crate::controller::{Action, NavCore};
use crate::input::{Focus, Key, Modifiers, TouchPoint, WheelInput};
use crate::layout::{SlideLayout, SlideSpan};
use crate::scroll::{Overflow, ScrollRoom, ScrollTree};

/// Slide geometry read straight from the DOM.
pub struct DomLayout<'a> {
    window: &'a Window,
    slides: &'a [HtmlElement],
    container: Option<&'a HtmlElement>,
}

impl SlideLayout for DomLayout<'_> {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn slide_span(&self, index: usize) -> Option<SlideSpan> {
        let slide = self.slides.get(index)?;
        if self.container.is_some() {
            return Some(SlideSpan::new(f64::from(slide.offset_top()), f64::from(slide.offset_height())));
        }
        let rect = slide.get_bounding_client_rect();
        Some(SlideSpan::new(rect.top() + page_scroll_y(self.window), rect.height()))
    }

    fn scroll_offset(&self) -> f64 {
        match self.container {
            Some(container) => f64::from(container.scroll_top()),
            None => page_scroll_y(self.window),
        }
    }

    fn has_container(&self) -> bool {
        self.container.is_some()
    }
}

/// Element tree as seen through computed styles, stopping below `<body>`.
/// The navigation container, when present, bounds every search.
pub struct DomTree<'a> {
    window: &'a Window,
    container: Option<&'a HtmlElement>,
}

impl ScrollTree for DomTree<'_> {
    type Node = Element;

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element().filter(|parent| !is_document_root(parent))
    }

    fn overflow_y(&self, node: &Element) -> Overflow {
        match self.window.get_computed_style(node) {
            Ok(Some(style)) => match style.get_property_value("overflow-y") {
                Ok(value) => Overflow::parse(&value),
                Err(_) => Overflow::Visible,
            },
            _ => Overflow::Visible,
        }
    }

    fn scroll_room(&self, node: &Element) -> ScrollRoom {
        ScrollRoom::new(
            f64::from(node.scroll_top()),
            f64::from(node.client_height()),
            f64::from(node.scroll_height()),
        )
    }

    fn is_boundary(&self, node: &Element) -> bool {
        self.container.is_some_and(|container| {
            let container: &Element = container;
            container == node
        })
    }
}

fn is_document_root(element: &Element) -> bool {
    matches!(element.tag_name().as_str(), "BODY" | "HTML")
}

fn page_scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}

/// The slide navigation controller bound to a live document.
pub struct Deck {
    window: Window,
    document: Document,
    slides: Vec<HtmlElement>,
    container: Option<HtmlElement>,
    pub core: NavCore<SystemClock, Element>,
}

impl Deck {
    /// Bind to `slides` (in document order) and an optional scrollable `container`.
    #[must_use]
    pub fn new(
        window: Window,
        document: Document,
        slides: Vec<HtmlElement>,
        container: Option<HtmlElement>,
        config: NavConfig,
    ) -> Self {
        log::debug!("deck: {} slides, container: {}", slides.len(), container.is_some());
        Self { window, document, slides, container, core: NavCore::new(config, SystemClock) }
    }

    /// Collect every element matching `slide_selector` and the container with id `container_id`.
    ///
    /// Returns `None` outside a browser document.
    #[must_use]
    pub fn from_document(slide_selector: &str, container_id: &str, config: NavConfig) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let slides = match document.query_selector_all(slide_selector) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
                .collect(),
            Err(_) => {
                log::warn!("deck: invalid slide selector {slide_selector:?}");
                Vec::new()
            }
        };
        let container = document
            .get_element_by_id(container_id)
            .and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
        Some(Self::new(window, document, slides, container, config))
    }

    #[must_use]
    pub fn container(&self) -> Option<&HtmlElement> {
        self.container.as_ref()
    }

    /// Current scroll offset of the container (or page).
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.layout().scroll_offset()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.core.current_index(&self.layout())
    }

    fn layout(&self) -> DomLayout<'_> {
        DomLayout { window: &self.window, slides: &self.slides, container: self.container.as_ref() }
    }

    fn focus(&self) -> Focus {
        let Some(active) = self.document.active_element() else {
            return Focus::Other;
        };
        let editable = active.dyn_ref::<HtmlElement>().is_some_and(HtmlElement::is_content_editable);
        Focus::classify(&active.tag_name(), editable)
    }

    // --- Input events ---

    pub fn on_key_down(&mut self, key: &str) {
        let layout = DomLayout { window: &self.window, slides: &self.slides, container: self.container.as_ref() };
        let actions = self.core.on_key_down(&Key(key.to_owned()), &layout);
        self.apply(actions);
    }

    pub fn on_wheel(&mut self, delta_y: f64, modifiers: Modifiers, target: Option<Element>) {
        let input = WheelInput { delta_y, modifiers, focus: self.focus(), target };
        let layout = DomLayout { window: &self.window, slides: &self.slides, container: self.container.as_ref() };
        let tree = DomTree { window: &self.window, container: self.container.as_ref() };
        let actions = self.core.on_wheel(&input, &layout, &tree);
        self.apply(actions);
    }

    pub fn on_touch_start(&mut self, touches: &[TouchPoint], target: Option<&Element>) {
        let tree = DomTree { window: &self.window, container: self.container.as_ref() };
        self.core.on_touch_start(touches, target, &tree);
    }

    pub fn on_touch_end(&mut self, changed: &[TouchPoint]) {
        let layout = DomLayout { window: &self.window, slides: &self.slides, container: self.container.as_ref() };
        let tree = DomTree { window: &self.window, container: self.container.as_ref() };
        let actions = self.core.on_touch_end(changed, &layout, &tree);
        self.apply(actions);
    }

    /// A "go to" control was activated with its declared `data-target` selector.
    pub fn on_control(&self, selector: &str) {
        self.apply(self.core.on_control(selector));
    }

    // --- Output ---

    fn apply(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::ScrollContainerTo { top } => {
                    if let Some(container) = self.container.as_ref() {
                        let options = ScrollToOptions::new();
                        options.set_top(top);
                        options.set_behavior(ScrollBehavior::Smooth);
                        container.scroll_to_with_scroll_to_options(&options);
                    }
                }
                Action::ScrollSlideIntoView { index } => {
                    if let Some(slide) = self.slides.get(index) {
                        reveal(slide);
                    }
                }
                Action::RevealTarget { selector } => match self.document.query_selector(&selector) {
                    Ok(Some(target)) => reveal(&target),
                    Ok(None) => log::debug!("deck: no element for {selector:?}"),
                    Err(_) => log::warn!("deck: invalid target selector {selector:?}"),
                },
            }
        }
    }
}

fn reveal(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
