use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use catalog_cart::cart_actor::{self, CartActionResult, CartContext, CartError};
use catalog_cart::catalog::demo_products;
use catalog_cart::clients::{ActorClient, CartClient};
use catalog_cart::framework::{mock::MockClient, FrameworkError};
use catalog_cart::model::{Cart, Product};
use catalog_cart::notify::{AddedToCart, CartNotifier};
use catalog_cart::persistence::{
    decode_cart, encode_cart, KeyValueStore, MemoryStore, StoreError, CART_KEY,
};

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<AddedToCart>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<AddedToCart> {
        self.notices.lock().clone()
    }
}

impl CartNotifier for RecordingNotifier {
    fn item_added(&self, notice: &AddedToCart) {
        self.notices.lock().push(notice.clone());
    }
}

/// A store whose backend is down.
struct UnavailableStore;

#[async_trait]
impl KeyValueStore for UnavailableStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }

    async fn set(&self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }
}

fn product(id: &str) -> Product {
    demo_products().into_iter().find(|p| p.id == id).unwrap()
}

fn spawn_cart(
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<RecordingNotifier>,
) -> (CartClient, tokio::task::JoinHandle<()>) {
    let (actor, client) = cart_actor::new(8);
    let handle = tokio::spawn(actor.run(CartContext::new(store, notifier)));
    (client, handle)
}

/// Real Cart actor with an in-memory store: every add is written through.
#[tokio::test]
async fn test_add_writes_through_and_notifies() {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let (client, handle) = spawn_cart(store.clone(), notifier.clone());

    let tea = product("BT001");
    let outcome = client.add_to_cart(&tea).await.unwrap();
    assert_eq!(outcome.line.quantity, 12);
    assert_eq!(outcome.total_items, 12);
    assert!(outcome.persisted);

    let outcome = client.add_quantity(&tea, 5).await.unwrap();
    assert_eq!(outcome.line.quantity, 17);
    assert_eq!(outcome.total_items, 17);

    let cart = client.cart().await.unwrap();
    let persisted = decode_cart(&store.peek(CART_KEY).unwrap()).unwrap();
    assert_eq!(persisted, cart);

    let notices = notifier.notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(
        notices[0].to_string(),
        "Birlanu Premium Tea 500g (12 boxes) added to cart"
    );
    assert_eq!(notices[1].quantity, 5);

    assert_eq!(client.total_items().await.unwrap(), 17);

    drop(client);
    handle.await.unwrap();
}

/// The actor starts from whatever the store holds.
#[tokio::test]
async fn test_hydrates_from_store_before_serving() {
    let seeded = cart_actor::add_to_cart(&Cart::new(), &product("BC001"), 48).unwrap();
    let store = Arc::new(MemoryStore::with_entry(CART_KEY, encode_cart(&seeded).unwrap()));
    let (client, handle) = spawn_cart(store, Arc::new(RecordingNotifier::default()));

    assert_eq!(client.cart().await.unwrap(), seeded);

    let outcome = client.add_to_cart(&product("BC001")).await.unwrap();
    assert_eq!(outcome.line.quantity, 48 + 24);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_corrupt_store_hydrates_empty() {
    let store = Arc::new(MemoryStore::with_entry(CART_KEY, "{not a cart"));
    let (client, handle) = spawn_cart(store, Arc::new(RecordingNotifier::default()));

    assert!(client.cart().await.unwrap().is_empty());
    assert_eq!(client.total_items().await.unwrap(), 0);

    drop(client);
    handle.await.unwrap();
}

/// Persistence failures are reported but never undo the add.
#[tokio::test]
async fn test_unavailable_store_keeps_in_memory_cart() {
    let notifier = Arc::new(RecordingNotifier::default());
    let (client, handle) = spawn_cart(Arc::new(UnavailableStore), notifier.clone());

    let outcome = client.add_to_cart(&product("BG001")).await.unwrap();
    assert!(!outcome.persisted);
    assert_eq!(outcome.total_items, 20);

    let cart = client.cart().await.unwrap();
    assert_eq!(cart.get("BG001").unwrap().quantity, 20);
    assert_eq!(notifier.notices().len(), 1);

    drop(client);
    handle.await.unwrap();
}

/// Rejected adds leave the cart, the store, and the notifier untouched.
#[tokio::test]
async fn test_rejected_adds_have_no_side_effects() {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let (client, handle) = spawn_cart(store.clone(), notifier.clone());

    let err = client.add_to_cart(&product("BH001")).await.unwrap_err();
    assert_eq!(err, CartError::OutOfStock("BH001".to_string()));

    let err = client.add_quantity(&product("BT001"), 0).await.unwrap_err();
    assert_eq!(err, CartError::InvalidQuantity(0));

    let mut nameless = product("BT001");
    nameless.id = String::new();
    let err = client.add_to_cart(&nameless).await.unwrap_err();
    assert!(matches!(err, CartError::InvalidInput(_)));

    assert!(client.cart().await.unwrap().is_empty());
    assert!(store.peek(CART_KEY).is_none());
    assert!(notifier.notices().is_empty());

    drop(client);
    handle.await.unwrap();
}

/// An add that would overflow a line is rejected and the earlier quantity stays.
#[tokio::test]
async fn test_overflowing_add_keeps_existing_line() {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let (client, handle) = spawn_cart(store.clone(), notifier.clone());

    let tea = product("BT001");
    client.add_quantity(&tea, u32::MAX - 1).await.unwrap();
    let saved = store.peek(CART_KEY).unwrap();

    let err = client.add_quantity(&tea, 2).await.unwrap_err();
    assert!(matches!(err, CartError::InvalidInput(_)));

    let cart = client.cart().await.unwrap();
    assert_eq!(cart.get("BT001").unwrap().quantity, u32::MAX - 1);
    assert_eq!(store.peek(CART_KEY).unwrap(), saved);
    assert_eq!(notifier.notices().len(), 1);

    drop(client);
    handle.await.unwrap();
}

/// CartClient logic against a mocked actor: error mapping and reply handling.
#[tokio::test]
async fn test_cart_client_with_mocked_actor() {
    let mut mock = MockClient::<Cart>::new();
    mock.expect_action()
        .return_err(FrameworkError::EntityError(Box::new(CartError::OutOfStock(
            "BH001".to_string(),
        ))));
    mock.expect_action().return_err(FrameworkError::ActorClosed);
    mock.expect_action().return_ok(CartActionResult::TotalItems(3));
    mock.expect_get().return_ok(Cart::new());

    let client = CartClient::new(mock.client());

    let err = client.add_to_cart(&product("BH001")).await.unwrap_err();
    assert_eq!(err, CartError::OutOfStock("BH001".to_string()));

    let err = client.add_to_cart(&product("BT001")).await.unwrap_err();
    assert!(matches!(err, CartError::ActorCommunicationError(_)));

    // A reply of the wrong shape is surfaced, not ignored
    let err = client.add_to_cart(&product("BT001")).await.unwrap_err();
    assert!(matches!(err, CartError::ActorCommunicationError(_)));

    assert!(client.snapshot().await.unwrap().is_empty());

    mock.verify();
}
