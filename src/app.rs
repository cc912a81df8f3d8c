//! Application state management for the storefront TUI
//!
//! This module contains the main application state, handling keyboard
//! input, data loading, cart mutations, and state transitions between
//! the different views. All mutable state is owned here and passed by
//! reference to the render and storage layers.

use crossterm::event::{KeyCode, KeyEvent};

use crate::cart::{AddOutcome, Cart, RemoveOutcome};
use crate::cli::StartupConfig;
use crate::data::{Catalog, CatalogClient, Product};
use crate::store::CartStore;

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while fetching the catalog
    Loading,
    /// Listing view showing trending strip and product cards
    Listing,
    /// Modal detail view for a specific product
    Detail(u64),
    /// Cart line-item table
    CartView,
}

/// Async work requested by a key handler and executed by the event loop.
///
/// Key handling is synchronous; network calls are deferred through this
/// enum and awaited between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Refetch products and categories
    ReloadAll,
    /// Switch the listing to a category (`None` = all products)
    LoadCategory(Option<String>),
    /// Fetch one product by id and open the detail view
    OpenDetail(u64),
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Index of the currently selected card in the listing
    pub selected_index: usize,
    /// Cursor position in the cart view
    pub cart_cursor: usize,
    /// Snapshot of the last full catalog fetch
    pub catalog: Catalog,
    /// Active category filter; `None` means all products
    pub active_category: Option<String>,
    /// Products currently shown in the listing
    pub listed: Vec<Product>,
    /// Product shown in the detail view, if open
    pub detail: Option<Product>,
    /// The shopping cart
    pub cart: Cart,
    /// Most recent error message, shown in the status bar
    pub last_error: Option<String>,
    /// Most recent action feedback (added/removed), shown in the status bar
    pub notice: Option<String>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show the help overlay
    pub show_help: bool,
    /// Async work requested by the last key event
    pending: Option<PendingAction>,
    /// Catalog API client
    client: CatalogClient,
    /// Cart persistence slot; `None` when no data directory is available
    store: Option<CartStore>,
}

impl App {
    /// Creates a new App instance with default clients and the XDG cart slot
    pub fn new() -> Self {
        Self::with_parts(CatalogClient::new(), CartStore::new())
    }

    /// Creates a new App instance with the given client and store.
    ///
    /// The cart is initialized from the store; a missing or corrupt slot
    /// yields an empty cart.
    pub fn with_parts(client: CatalogClient, store: Option<CartStore>) -> Self {
        let cart = match &store {
            Some(store) => Cart::from_items(store.load()),
            None => Cart::new(),
        };
        Self {
            state: AppState::Loading,
            selected_index: 0,
            cart_cursor: 0,
            catalog: Catalog::default(),
            active_category: None,
            listed: Vec::new(),
            detail: None,
            cart,
            last_error: None,
            notice: None,
            should_quit: false,
            show_help: false,
            pending: None,
            client,
            store,
        }
    }

    /// Creates a new App instance from CLI startup configuration.
    ///
    /// Applies `--api-url` to the catalog client and queues an initial
    /// category filter from `--category`.
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let client = match &config.api_url {
            Some(url) => CatalogClient::with_base_url(url.clone()),
            None => CatalogClient::new(),
        };
        let mut app = Self::with_parts(client, CartStore::new());
        if let Some(category) = config.initial_category {
            app.pending = Some(PendingAction::LoadCategory(Some(category)));
        }
        app
    }

    /// Returns the number of cards in the current listing
    pub fn listed_count(&self) -> usize {
        self.listed.len()
    }

    /// Returns the currently selected product in the listing, if any
    pub fn selected_product(&self) -> Option<&Product> {
        self.listed.get(self.selected_index)
    }

    /// Takes the pending async action, if one was requested
    pub fn take_pending(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    /// Fetches the catalog and transitions to the listing.
    ///
    /// Products and categories load concurrently. A failed fetch records
    /// the error and leaves the previous contents in place; the listing
    /// is shown either way so the retry hint is reachable.
    pub async fn load_initial(&mut self) {
        let (products, categories) = futures::join!(
            self.client.fetch_products(),
            self.client.fetch_categories()
        );

        match (products, categories) {
            (Ok(products), Ok(categories)) => {
                self.catalog = Catalog::new(products, categories);
                self.listed = self.catalog.products.clone();
                self.last_error = None;
            }
            (Ok(products), Err(err)) => {
                // Listing still works without the category bar
                self.catalog = Catalog::new(products, Vec::new());
                self.listed = self.catalog.products.clone();
                self.last_error = Some(format!("Error fetching categories: {}", err));
            }
            (Err(err), _) => {
                self.last_error = Some(format!("Error fetching products: {}", err));
            }
        }

        self.selected_index = 0;
        self.state = AppState::Listing;
    }

    /// Runs the pending async action, if any
    pub async fn run_pending(&mut self) {
        match self.take_pending() {
            Some(PendingAction::ReloadAll) => self.load_initial().await,
            Some(PendingAction::LoadCategory(category)) => self.load_category(category).await,
            Some(PendingAction::OpenDetail(id)) => self.open_detail(id).await,
            None => {}
        }
    }

    /// Switches the listing to the given category.
    ///
    /// "All" resolves against the in-memory snapshot; named categories
    /// refetch from the category endpoint. On failure the previous
    /// listing and filter stay in place.
    pub async fn load_category(&mut self, category: Option<String>) {
        match category {
            None => {
                self.listed = self.catalog.products.clone();
                self.active_category = None;
                self.selected_index = 0;
            }
            Some(name) => match self.client.fetch_by_category(&name).await {
                Ok(products) => {
                    self.listed = products;
                    self.active_category = Some(name);
                    self.selected_index = 0;
                    self.last_error = None;
                }
                Err(err) => {
                    self.last_error = Some(format!("Error fetching category: {}", err));
                }
            },
        }
    }

    /// Fetches a product by id and opens the detail view.
    ///
    /// On failure the listing stays as-is with the error recorded.
    pub async fn open_detail(&mut self, id: u64) {
        match self.client.fetch_product(id).await {
            Ok(product) => {
                self.detail = Some(product);
                self.state = AppState::Detail(id);
            }
            Err(err) => {
                self.last_error = Some(format!("Error fetching product details: {}", err));
            }
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q`: Quit from any view (`Esc` also quits from the listing)
    /// - `Up`/`k`, `Down`/`j`: Move selection, wrapping
    /// - `Enter`: Open detail view for the selected product
    /// - `a`: Add selected product to cart
    /// - `c`: Open the cart view
    /// - `Tab`/`BackTab`: Cycle the category filter
    /// - `r`: Refetch products and categories
    /// - `b` (detail): Buy - add to cart and close the detail view
    /// - `d`/`Delete` (cart): Remove the entry under the cursor
    /// - `Esc` (detail/cart): Back to the listing
    /// - `?`: Toggle help overlay
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match self.state {
            AppState::Loading => {
                // Only quit is allowed during loading
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::Listing => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Enter => {
                    if let Some(product) = self.selected_product() {
                        self.pending = Some(PendingAction::OpenDetail(product.id));
                    }
                }
                KeyCode::Char('a') => {
                    self.add_selected_to_cart();
                }
                KeyCode::Char('c') => {
                    self.cart_cursor = 0;
                    self.state = AppState::CartView;
                }
                KeyCode::Tab => {
                    self.pending = Some(PendingAction::LoadCategory(self.next_category()));
                }
                KeyCode::BackTab => {
                    self.pending = Some(PendingAction::LoadCategory(self.prev_category()));
                }
                KeyCode::Char('r') => {
                    self.pending = Some(PendingAction::ReloadAll);
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::Detail(_) => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc => {
                    self.close_detail();
                }
                KeyCode::Char('b') => {
                    self.buy_from_detail();
                }
                KeyCode::Char('a') => {
                    self.add_from_detail();
                }
                KeyCode::Char('c') => {
                    self.close_detail();
                    self.cart_cursor = 0;
                    self.state = AppState::CartView;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::CartView => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Char('c') => {
                    self.state = AppState::Listing;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_cart_cursor_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_cart_cursor_down();
                }
                KeyCode::Char('d') | KeyCode::Delete => {
                    self.remove_at_cursor();
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }

    /// Adds the selected listing product to the cart by catalog lookup
    fn add_selected_to_cart(&mut self) {
        let Some(id) = self.selected_product().map(|p| p.id) else {
            return;
        };
        match self.cart.add(id, &self.catalog) {
            AddOutcome::Added => {
                self.notice = Some("Added to cart".to_string());
                self.persist_cart();
            }
            AddOutcome::UnknownProduct(id) => {
                self.notice = Some(format!("Product {} is not in the catalog", id));
            }
        }
    }

    /// Adds the detail-view product to the cart without closing the view
    fn add_from_detail(&mut self) {
        if let Some(product) = self.detail.clone() {
            self.cart.add_product(product);
            self.notice = Some("Added to cart".to_string());
            self.persist_cart();
        }
    }

    /// Buy action: add the detail-view product and close the detail view
    fn buy_from_detail(&mut self) {
        if let Some(product) = self.detail.take() {
            self.cart.add_product(product);
            self.notice = Some("Added to cart".to_string());
            self.persist_cart();
        }
        self.state = AppState::Listing;
    }

    /// Removes the cart entry under the cursor
    fn remove_at_cursor(&mut self) {
        match self.cart.remove(self.cart_cursor) {
            RemoveOutcome::Removed(product) => {
                self.notice = Some(format!("Removed {}", product.title));
                self.persist_cart();
                if self.cart_cursor >= self.cart.len() && self.cart_cursor > 0 {
                    self.cart_cursor -= 1;
                }
            }
            RemoveOutcome::OutOfRange(_) => {}
        }
    }

    /// Mirrors the cart to the persistent slot after a mutation.
    ///
    /// The in-memory mutation is kept even when the write fails; the
    /// failure is surfaced in the status bar.
    fn persist_cart(&mut self) {
        if let Some(store) = &self.store {
            if let Err(err) = store.save(self.cart.items()) {
                self.last_error = Some(format!("Error saving cart: {}", err));
            }
        }
    }

    /// Closes the detail view and returns to the listing
    fn close_detail(&mut self) {
        self.detail = None;
        self.state = AppState::Listing;
    }

    /// Category after the active one, cycling through "all" and the
    /// fetched category names
    fn next_category(&self) -> Option<String> {
        let options = self.category_options();
        let current = self.category_position(&options);
        options[(current + 1) % options.len()].clone()
    }

    /// Category before the active one
    fn prev_category(&self) -> Option<String> {
        let options = self.category_options();
        let current = self.category_position(&options);
        options[(current + options.len() - 1) % options.len()].clone()
    }

    /// Filter options in display order: "all" first, then fetched names
    fn category_options(&self) -> Vec<Option<String>> {
        let mut options = vec![None];
        options.extend(self.catalog.categories.iter().cloned().map(Some));
        options
    }

    /// Position of the active filter within the options
    fn category_position(&self, options: &[Option<String>]) -> usize {
        options
            .iter()
            .position(|o| *o == self.active_category)
            .unwrap_or(0)
    }

    /// Moves the selection up in the listing, wrapping to bottom if at top
    fn move_selection_up(&mut self) {
        let count = self.listed_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the selection down in the listing, wrapping to top if at bottom
    fn move_selection_down(&mut self) {
        let count = self.listed_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves the cart cursor up, wrapping at the top
    fn move_cart_cursor_up(&mut self) {
        let count = self.cart.len();
        if count == 0 {
            return;
        }
        if self.cart_cursor == 0 {
            self.cart_cursor = count - 1;
        } else {
            self.cart_cursor -= 1;
        }
    }

    /// Moves the cart cursor down, wrapping at the bottom
    fn move_cart_cursor_down(&mut self) {
        let count = self.cart.len();
        if count == 0 {
            return;
        }
        self.cart_cursor = (self.cart_cursor + 1) % count;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
