//! Inline script templates and the state machines they implement
//!
//! Interactive sections ship their behavior as inline `<script>` text. Each
//! behavior is a named template with `__TOKEN__` placeholders filled in per
//! instance. The state transitions those scripts perform are mirrored here
//! as plain Rust types so the index arithmetic and open/close rules can be
//! tested without a browser. Template and mirror must change together.

use crate::html::escape_json_for_script;

/// Auto-advance period of one-at-a-time carousels
pub const SLIDE_INTERVAL_MS: u32 = 4000;

/// Auto-advance period of the paged grid carousel
pub const PAGE_INTERVAL_MS: u32 = 5000;

/// Items shown per page by the paged grid carousel
pub const ITEMS_PER_PAGE: usize = 3;

/// Viewport width below which the nav links collapse behind the toggle
pub const NAV_BREAKPOINT_PX: u32 = 768;

/// DOM id of the nav bar root
pub const NAV_ID: &str = "pc-nav";

/// Name of the nav bar's `window` controller
pub const NAV_CONTROLLER: &str = "pcNav";

/// A named script template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptTemplate {
	/// Template name, emitted as a `data-script` attribute
	pub name: &'static str,
	source: &'static str,
}

impl ScriptTemplate {
	/// Substitute `__TOKEN__` placeholders, in the order given
	pub fn fill(&self, values: &[(&str, &str)]) -> String {
		let mut script = self.source.to_string();
		for (token, value) in values {
			script = script.replace(&format!("__{}__", token), value);
		}
		script
	}

	/// Filled template wrapped in a `<script>` element
	pub fn tag(&self, values: &[(&str, &str)]) -> String {
		format!(
			"<script data-script=\"{}\">{}</script>",
			self.name,
			self.fill(values)
		)
	}
}

/// One-at-a-time carousel: dots, optional arrows and auto-advance.
///
/// Tokens: `ID`, `CONTROLLER`, `AUTO` (`true`/`false`), `INTERVAL`.
pub const CAROUSEL_SCRIPT: ScriptTemplate = ScriptTemplate {
	name: "carousel",
	source: r#"(function(){
var root=document.getElementById('__ID__');if(!root)return;
var slides=root.querySelectorAll('[data-slide]');var dots=root.querySelectorAll('[data-dot]');
var count=slides.length;var index=0;
function show(i){if(count===0)return;index=((i%count)+count)%count;
for(var k=0;k<count;k++){slides[k].classList.toggle('is-active',k===index);slides[k].setAttribute('aria-hidden',k===index?'false':'true');}
for(var d=0;d<dots.length;d++){dots[d].classList.toggle('is-active',d===index);}
root.setAttribute('data-index',String(index));}
window.__CONTROLLER__={go:function(i){show(i);},next:function(){show(index+1);},prev:function(){show(index-1);}};
show(0);
if(__AUTO__&&count>1){setInterval(function(){show(index+1);},__INTERVAL__);}
})();"#,
};

/// Typed gallery: the carousel script plus category jumps.
///
/// Tokens: `ID`, `CONTROLLER`, `AUTO`, `INTERVAL`, `CATEGORIES` (JSON array).
pub const GALLERY_SCRIPT: ScriptTemplate = ScriptTemplate {
	name: "gallery",
	source: r#"(function(){
var root=document.getElementById('__ID__');if(!root)return;
var slides=root.querySelectorAll('[data-slide]');var dots=root.querySelectorAll('[data-dot]');
var buttons=root.querySelectorAll('[data-category]');var categories=__CATEGORIES__;
var count=slides.length;var index=0;
function show(i){if(count===0)return;index=((i%count)+count)%count;
for(var k=0;k<count;k++){slides[k].classList.toggle('is-active',k===index);slides[k].setAttribute('aria-hidden',k===index?'false':'true');}
for(var d=0;d<dots.length;d++){dots[d].classList.toggle('is-active',d===index);}
root.setAttribute('data-index',String(index));}
function category(c){var name=categories[c];
for(var b=0;b<buttons.length;b++){buttons[b].classList.toggle('is-active',b===c);}
for(var k=0;k<count;k++){if(slides[k].getAttribute('data-type')===name){show(k);return;}}}
window.__CONTROLLER__={go:function(i){show(i);},next:function(){show(index+1);},prev:function(){show(index-1);},category:category};
show(0);
if(__AUTO__&&count>1){setInterval(function(){show(index+1);},__INTERVAL__);}
})();"#,
};

/// Paged grid: three items per page, translated horizontally.
///
/// Tokens: `ID`, `CONTROLLER`, `AUTO`, `INTERVAL`, `PER_PAGE`.
pub const PAGED_SCRIPT: ScriptTemplate = ScriptTemplate {
	name: "paged-carousel",
	source: r#"(function(){
var root=document.getElementById('__ID__');if(!root)return;
var track=root.querySelector('[data-track]');var count=root.querySelectorAll('[data-item]').length;
var pages=Math.ceil(count/__PER_PAGE__);var page=0;
function show(p){if(pages===0)return;page=((p%pages)+pages)%pages;
track.style.transform='translateX(-'+(page*100)+'%)';root.setAttribute('data-page',String(page));}
window.__CONTROLLER__={next:function(){show(page+1);},prev:function(){show(page-1);}};
show(0);
if(__AUTO__&&pages>1){setInterval(function(){show(page+1);},__INTERVAL__);}
})();"#,
};

/// Nav bar: collapse toggle, submenus, outside-click and Escape close.
///
/// Tokens: `ID`, `CONTROLLER`.
pub const NAV_SCRIPT: ScriptTemplate = ScriptTemplate {
	name: "nav",
	source: r#"(function(){
var nav=document.getElementById('__ID__');if(!nav)return;
var toggle=nav.querySelector('[data-nav-toggle]');var subs=nav.querySelectorAll('[data-has-children]');
function sync(el){var open=el.getAttribute('data-clicked')==='true'||el.getAttribute('data-hovered')==='true';
el.setAttribute('data-submenu-open',open?'true':'false');}
function clearSubs(){for(var i=0;i<subs.length;i++){subs[i].setAttribute('data-clicked','false');subs[i].setAttribute('data-hovered','false');sync(subs[i]);}}
function setOpen(open){nav.setAttribute('data-open',open?'true':'false');if(toggle){toggle.setAttribute('aria-expanded',open?'true':'false');}if(!open){clearSubs();}}
window.__CONTROLLER__={
toggle:function(){setOpen(nav.getAttribute('data-open')!=='true');},
close:function(){setOpen(false);},
toggleSub:function(i){var el=subs[i];if(!el)return;el.setAttribute('data-clicked',el.getAttribute('data-clicked')==='true'?'false':'true');sync(el);},
hoverSub:function(i,on){var el=subs[i];if(!el)return;el.setAttribute('data-hovered',on?'true':'false');sync(el);}};
document.addEventListener('click',function(e){if(!nav.contains(e.target)){setOpen(false);}});
document.addEventListener('keydown',function(e){if(e.key==='Escape'){setOpen(false);}});
})();"#,
};

/// Encode strings as a JSON array safe inside a `<script>` element
pub fn json_array<T: AsRef<str>>(values: &[T]) -> String {
	let values: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
	let json = serde_json::to_string(&values).unwrap_or_else(|_| "[]".to_string());
	escape_json_for_script(&json)
}

/// Mirror of the one-at-a-time carousel state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
	index: usize,
	len: usize,
	auto_scroll: bool,
}

impl CarouselState {
	/// State of a freshly loaded carousel
	pub fn new(len: usize, auto_scroll: bool) -> Self {
		Self {
			index: 0,
			len,
			auto_scroll,
		}
	}

	/// Visible item, `None` when there are no items
	pub fn index(&self) -> Option<usize> {
		(self.len > 0).then_some(self.index)
	}

	/// Number of items
	pub fn len(&self) -> usize {
		self.len
	}

	/// Whether there are no items
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Show item `i`, wrapping modulo the item count
	pub fn go_to(&mut self, i: i64) {
		if self.len == 0 {
			return;
		}
		self.index = i.rem_euclid(self.len as i64) as usize;
	}

	/// Advance one item
	pub fn next(&mut self) {
		self.go_to(self.index as i64 + 1);
	}

	/// Step back one item
	pub fn prev(&mut self) {
		self.go_to(self.index as i64 - 1);
	}

	/// One auto-advance timer period elapsed
	pub fn tick(&mut self) {
		if self.auto_scroll && self.len > 1 {
			self.next();
		}
	}
}

/// Mirror of the typed gallery state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
	carousel: CarouselState,
	item_types: Vec<String>,
	categories: Vec<String>,
	active_category: Option<usize>,
}

impl GalleryState {
	/// State of a freshly loaded gallery over items of the given types
	pub fn new(item_types: Vec<String>, auto_scroll: bool) -> Self {
		let mut categories: Vec<String> = Vec::new();
		for t in &item_types {
			if !categories.contains(t) {
				categories.push(t.clone());
			}
		}
		Self {
			carousel: CarouselState::new(item_types.len(), auto_scroll),
			item_types,
			categories,
			active_category: None,
		}
	}

	/// Underlying carousel state
	pub fn carousel(&self) -> &CarouselState {
		&self.carousel
	}

	/// Mutable carousel state for dot, arrow and timer events
	pub fn carousel_mut(&mut self) -> &mut CarouselState {
		&mut self.carousel
	}

	/// Categories in first-appearance order
	pub fn categories(&self) -> &[String] {
		&self.categories
	}

	/// Category button last clicked
	pub fn active_category(&self) -> Option<usize> {
		self.active_category
	}

	/// Click category button `c`: highlight it and jump to its first item
	pub fn select_category(&mut self, c: usize) {
		let Some(name) = self.categories.get(c) else {
			return;
		};
		self.active_category = Some(c);
		if let Some(first) = self.item_types.iter().position(|t| t == name) {
			self.carousel.go_to(first as i64);
		}
	}
}

/// Mirror of the paged grid state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagedCarousel {
	page: usize,
	pages: usize,
	auto_scroll: bool,
}

impl PagedCarousel {
	/// State of a freshly loaded grid with `items` items
	pub fn new(items: usize, auto_scroll: bool) -> Self {
		Self {
			page: 0,
			pages: items.div_ceil(ITEMS_PER_PAGE),
			auto_scroll,
		}
	}

	/// Current page
	pub fn page(&self) -> usize {
		self.page
	}

	/// Number of pages
	pub fn pages(&self) -> usize {
		self.pages
	}

	/// Horizontal translation of the track in percent
	pub fn offset_percent(&self) -> usize {
		self.page * 100
	}

	/// Move forward one page, wrapping
	pub fn next_page(&mut self) {
		if self.pages > 0 {
			self.page = (self.page + 1) % self.pages;
		}
	}

	/// Move back one page, wrapping
	pub fn prev_page(&mut self) {
		if self.pages > 0 {
			self.page = (self.page + self.pages - 1) % self.pages;
		}
	}

	/// One auto-advance timer period elapsed
	pub fn tick(&mut self) {
		if self.auto_scroll && self.pages > 1 {
			self.next_page();
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SubmenuState {
	clicked: bool,
	hovered: bool,
}

/// Mirror of the nav bar state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenuState {
	open: bool,
	submenus: Vec<SubmenuState>,
}

impl NavMenuState {
	/// Closed nav with `submenus` child-bearing items
	pub fn new(submenus: usize) -> Self {
		Self {
			open: false,
			submenus: vec![SubmenuState::default(); submenus],
		}
	}

	/// Whether the collapsed link list is expanded
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Whether submenu `i` is shown: clicked open or hovered
	pub fn submenu_visible(&self, i: usize) -> bool {
		self.submenus
			.get(i)
			.is_some_and(|s| s.clicked || s.hovered)
	}

	/// Toggle button clicked
	pub fn toggle(&mut self) {
		if self.open {
			self.close();
		} else {
			self.open = true;
		}
	}

	/// Close the menu and clear every submenu's click and hover state
	pub fn close(&mut self) {
		self.open = false;
		for submenu in &mut self.submenus {
			*submenu = SubmenuState::default();
		}
	}

	/// Parent item `i` clicked
	pub fn toggle_submenu(&mut self, i: usize) {
		if let Some(submenu) = self.submenus.get_mut(i) {
			submenu.clicked = !submenu.clicked;
		}
	}

	/// Pointer entered or left parent item `i`
	pub fn hover_submenu(&mut self, i: usize, on: bool) {
		if let Some(submenu) = self.submenus.get_mut(i) {
			submenu.hovered = on;
		}
	}

	/// Click landed outside the nav
	pub fn click_outside(&mut self) {
		self.close();
	}

	/// Escape pressed
	pub fn escape(&mut self) {
		self.close();
	}
}
