// savora-client/tests/client_integration.rs
// End-to-end tests driving a real mock backend on an ephemeral port.

use rust_decimal::Decimal;

use savora_backend_mock::{router, AppState, Config, JwtConfig};
use savora_client::store::{filter_by_role, CONSOLE_MENU};
use savora_client::validate::validate_register;
use savora_client::{Cart, ClientConfig, ClientError, HttpClient, Session};
use shared::models::{ItemCreate, NotificationUpdate, OrderDetail, Role, UserRegister};

fn test_config() -> Config {
    Config {
        http_port: 0,
        jwt: JwtConfig {
            secret: "integration-test-signing-secret-of-64-chars-aaaaaaaaaaaaaaaaaaaa".to_string(),
            expiration_minutes: 60,
        },
        environment: "test".to_string(),
        public_base_url: String::new(),
        payment_base_url: "https://pay.savora.test".to_string(),
        admin_username: "admin".to_string(),
        admin_password: "admin123".to_string(),
    }
}

/// Spawn a fresh backend on an ephemeral port, returning its base URL.
async fn spawn_backend(mut config: Config) -> String {
    savora_backend_mock::init_tracing();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    config.public_base_url = format!("http://{}", addr);

    let state = AppState::initialize(&config).expect("state init");
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.expect("serve");
    });

    format!("http://{}", addr)
}

async fn admin_client(base_url: &str) -> HttpClient {
    let mut client = ClientConfig::new(base_url).build();
    client
        .login("admin", "admin123")
        .await
        .expect("admin login");
    client
}

fn register_payload(username: &str, email: &str) -> UserRegister {
    UserRegister {
        username: username.to_string(),
        password: "s3cret-pw".to_string(),
        name: "An Nguyen".to_string(),
        email: email.to_string(),
        phone: "0912345678".to_string(),
        address: "12 Hang Bac, Ha Noi".to_string(),
        avatar_url: String::new(),
        role: Role::Customer,
    }
}

fn item_payload(name: &str, price: &str) -> ItemCreate {
    ItemCreate {
        item_name: name.to_string(),
        price: price.parse().expect("decimal price"),
        category: "noodles".to_string(),
        description: format!("{} with fresh herbs", name),
        availability: true,
        image_url: String::new(),
    }
}

/// Seed two menu items as admin, returning their ids.
async fn seed_menu(base_url: &str) -> (i64, i64) {
    let admin = admin_client(base_url).await;
    let pho = admin
        .create_item(&item_payload("Pho Bo", "45000"))
        .await
        .expect("create item");
    let banh_mi = admin
        .create_item(&item_payload("Banh Mi", "25000"))
        .await
        .expect("create item");
    (pho.item_id, banh_mi.item_id)
}

#[tokio::test]
async fn test_storefront_checkout_flow() {
    let base_url = spawn_backend(test_config()).await;
    seed_menu(&base_url).await;

    // Register, then log in with the new credentials
    let mut client = ClientConfig::new(&base_url).build();
    let payload = register_payload("an.nguyen", "an@example.com");
    validate_register(&payload).expect("payload passes client-side validation");
    client.register(&payload).await.expect("register");

    let login = client.login("an.nguyen", "s3cret-pw").await.expect("login");
    assert_eq!(login.user.role, Role::Customer);
    assert!(client.token().is_some());

    let mut session = Session::new();
    session.set_login(&login, chrono::Utc::now());
    assert!(session.is_logged_in());
    assert!(!session.is_expired());

    // Browse the menu and fill the cart with two distinct items
    let menu = client.list_items().await.expect("list items");
    assert_eq!(menu.len(), 2);

    let mut cart = Cart::new();
    cart.add(menu[0].clone());
    cart.add(menu[1].clone());
    assert_eq!(cart.line_count(), 2);
    let expected_total = cart.total();

    // Checkout: the cart empties and a payment redirect comes back
    let link = client
        .checkout(&mut cart, login.user.user_id, "ring the bell")
        .await
        .expect("checkout");
    assert!(cart.is_empty());
    assert!(link
        .checkout_url
        .starts_with("https://pay.savora.test/checkout/"));

    // The pending order carries the re-priced total
    let orders = client.list_my_orders().await.expect("list my orders");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, shared::models::OrderStatus::Pending);
    assert_eq!(orders[0].total, expected_total);

    // And an invoice was produced for it
    let invoices = client.list_invoices().await.expect("list invoices");
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].order_id, link.order_id);
    assert_eq!(invoices[0].payment.payment_status, "PENDING");
}

#[tokio::test]
async fn test_order_lifecycle_transitions() {
    let base_url = spawn_backend(test_config()).await;
    let (pho_id, _) = seed_menu(&base_url).await;

    let mut customer = ClientConfig::new(&base_url).build();
    customer
        .register(&register_payload("binh.tran", "binh@example.com"))
        .await
        .expect("register");
    let login = customer
        .login("binh.tran", "s3cret-pw")
        .await
        .expect("login");

    let menu = customer.list_items().await.expect("list items");
    let pho = menu.iter().find(|i| i.item_id == pho_id).expect("seeded item");

    let mut cart = Cart::new();
    cart.add(pho.clone());
    let link = customer
        .checkout(&mut cart, login.user.user_id, "")
        .await
        .expect("checkout");

    let admin = admin_client(&base_url).await;

    // Customer cannot mark the order ready; that transition is the admin's
    let err = customer.mark_order_ready(link.order_id).await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));

    // Customer cannot receive an order that is still pending
    let err = customer
        .mark_order_received(link.order_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { .. }));

    // Pending -> Ready -> Received
    let order = admin
        .mark_order_ready(link.order_id)
        .await
        .expect("mark ready");
    assert_eq!(order.status, shared::models::OrderStatus::Ready);

    let order = customer
        .mark_order_received(link.order_id)
        .await
        .expect("mark received");
    assert_eq!(order.status, shared::models::OrderStatus::Received);

    // A received order cannot be moved again
    let err = admin.mark_order_ready(link.order_id).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { .. }));

    // Nor canceled
    let err = customer
        .cancel_order(link.order_id, "changed my mind")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { .. }));
}

#[tokio::test]
async fn test_cancel_records_note() {
    let base_url = spawn_backend(test_config()).await;
    let (pho_id, _) = seed_menu(&base_url).await;

    let mut customer = ClientConfig::new(&base_url).build();
    customer
        .register(&register_payload("chi.le", "chi@example.com"))
        .await
        .expect("register");
    let login = customer.login("chi.le", "s3cret-pw").await.expect("login");

    let order = customer
        .create_order(&shared::models::OrderCreate {
            user_id: login.user.user_id,
            status: shared::models::OrderStatus::Pending,
            note: String::new(),
            details: vec![OrderDetail {
                item_id: pho_id,
                quantity: 2,
            }],
        })
        .await
        .expect("create order");

    let canceled = customer
        .cancel_order(order.order.order_id, "ordered twice by mistake")
        .await
        .expect("cancel");
    assert_eq!(canceled.status, shared::models::OrderStatus::Canceled);
    assert_eq!(canceled.note, "ordered twice by mistake");

    let info = customer
        .get_order(order.order.order_id)
        .await
        .expect("get order");
    assert_eq!(info.order.status, shared::models::OrderStatus::Canceled);
}

#[tokio::test]
async fn test_checkout_rejects_tampered_total() {
    let base_url = spawn_backend(test_config()).await;
    let (pho_id, _) = seed_menu(&base_url).await;

    let mut customer = ClientConfig::new(&base_url).build();
    customer
        .register(&register_payload("dao.pham", "dao@example.com"))
        .await
        .expect("register");
    let login = customer.login("dao.pham", "s3cret-pw").await.expect("login");

    // One Pho Bo costs 45000; claim 1000
    let err = customer
        .create_payment_link(&shared::models::CheckoutRequest {
            user_id: login.user.user_id,
            total: Decimal::from(1000),
            note: String::new(),
            details: vec![OrderDetail {
                item_id: pho_id,
                quantity: 1,
            }],
        })
        .await
        .unwrap_err();

    match err {
        ClientError::Api { message, .. } => {
            assert!(message.contains("does not match current menu prices"))
        }
        other => panic!("expected total-mismatch rejection, got {:?}", other),
    }

    // Nothing was created
    let orders = customer.list_my_orders().await.expect("list my orders");
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_admin_gating_and_public_routes() {
    let base_url = spawn_backend(test_config()).await;
    seed_menu(&base_url).await;

    // The menu is readable without a token
    let anonymous = ClientConfig::new(&base_url).build();
    let menu = anonymous.list_items().await.expect("public menu");
    assert_eq!(menu.len(), 2);

    // But placing an order is not
    let err = anonymous
        .create_order(&shared::models::OrderCreate {
            user_id: 1,
            status: shared::models::OrderStatus::Pending,
            note: String::new(),
            details: vec![OrderDetail {
                item_id: menu[0].item_id,
                quantity: 1,
            }],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));

    // Customers cannot reach admin operations
    let mut customer = ClientConfig::new(&base_url).build();
    customer
        .register(&register_payload("em.vu", "em@example.com"))
        .await
        .expect("register");
    customer.login("em.vu", "s3cret-pw").await.expect("login");

    let err = customer
        .create_item(&item_payload("Com Tam", "40000"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));

    let err = customer.list_users().await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));

    let err = customer.list_orders().await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));

    // The role-filtered menu mirrors that gating
    let entries = filter_by_role(CONSOLE_MENU, Some(Role::Customer));
    assert!(entries.iter().all(|e| e.key == "admin/user"));
}

#[tokio::test]
async fn test_item_crud() {
    let base_url = spawn_backend(test_config()).await;
    let admin = admin_client(&base_url).await;

    let mut item = admin
        .create_item(&item_payload("Bun Cha", "55000"))
        .await
        .expect("create");

    item.price = "60000".parse().expect("decimal");
    item.availability = false;
    let updated = admin.update_item(&item).await.expect("update");
    assert_eq!(updated.price, "60000".parse().expect("decimal"));
    assert!(!updated.availability);

    let fetched = admin.get_item(item.item_id).await.expect("get");
    assert_eq!(fetched, updated);

    admin.delete_item(item.item_id).await.expect("delete");
    let err = admin.get_item(item.item_id).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));

    // Unavailable items cannot be ordered
    let snack = admin
        .create_item(&ItemCreate {
            availability: false,
            ..item_payload("Nem Ran", "30000")
        })
        .await
        .expect("create");
    let err = admin
        .create_order(&shared::models::OrderCreate {
            user_id: 1,
            status: shared::models::OrderStatus::Pending,
            note: String::new(),
            details: vec![OrderDetail {
                item_id: snack.item_id,
                quantity: 1,
            }],
        })
        .await
        .unwrap_err();
    match err {
        ClientError::Api { message, .. } => assert!(message.contains("currently unavailable")),
        other => panic!("expected unavailable rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_side_validation_messages_are_concatenated() {
    let base_url = spawn_backend(test_config()).await;
    let client = ClientConfig::new(&base_url).build();

    // Empty username and password: one message per violated rule
    let err = client
        .register(&UserRegister {
            username: String::new(),
            password: String::new(),
            name: "X".to_string(),
            email: "x@example.com".to_string(),
            phone: "0912345678".to_string(),
            address: String::new(),
            avatar_url: String::new(),
            role: Role::Customer,
        })
        .await
        .unwrap_err();

    match err {
        ClientError::Validation(msg) => {
            assert!(msg.contains("Username is required"));
            assert!(msg.contains("Password is required"));
            assert!(msg.contains('\n'));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_profile_update_and_password_change() {
    let base_url = spawn_backend(test_config()).await;

    let mut client = ClientConfig::new(&base_url).build();
    client
        .register(&register_payload("giang.ho", "giang@example.com"))
        .await
        .expect("register");
    client.login("giang.ho", "s3cret-pw").await.expect("login");

    let updated = client
        .update_profile(&shared::models::UserUpdate {
            name: "Giang Ho".to_string(),
            email: "giang@example.com".to_string(),
            phone: "0987654321".to_string(),
            address: "45 Tran Phu, Da Nang".to_string(),
            avatar_url: String::new(),
        })
        .await
        .expect("update profile");
    assert_eq!(updated.phone, "0987654321");

    let profile = client.get_profile().await.expect("get profile");
    assert_eq!(profile.address, "45 Tran Phu, Da Nang");

    // Wrong old password is rejected
    let err = client
        .change_password(&shared::models::ChangePassword {
            old_password: "wrong".to_string(),
            new_password: "new-pw-123".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    client
        .change_password(&shared::models::ChangePassword {
            old_password: "s3cret-pw".to_string(),
            new_password: "new-pw-123".to_string(),
        })
        .await
        .expect("change password");

    // The new password works, the old one does not
    let mut fresh = ClientConfig::new(&base_url).build();
    assert!(fresh.login("giang.ho", "s3cret-pw").await.is_err());
    fresh
        .login("giang.ho", "new-pw-123")
        .await
        .expect("login with new password");
}

#[tokio::test]
async fn test_notification_flow() {
    let base_url = spawn_backend(test_config()).await;
    let (pho_id, _) = seed_menu(&base_url).await;

    let mut customer = ClientConfig::new(&base_url).build();
    customer
        .register(&register_payload("hanh.do", "hanh@example.com"))
        .await
        .expect("register");
    let login = customer.login("hanh.do", "s3cret-pw").await.expect("login");

    let menu = customer.list_items().await.expect("menu");
    let pho = menu.iter().find(|i| i.item_id == pho_id).expect("item");
    let mut cart = Cart::new();
    cart.add(pho.clone());
    let link = customer
        .checkout(&mut cart, login.user.user_id, "")
        .await
        .expect("checkout");

    // Checkout notified the admins; a fresh admin login reports it unread
    let mut admin = ClientConfig::new(&base_url).build();
    let admin_login = admin.login("admin", "admin123").await.expect("admin login");
    assert_eq!(admin_login.notice_count, 1);

    let mut inbox = savora_client::NotificationInbox::new();
    inbox.replace(admin.list_notifications().await.expect("list notifications"));
    assert_eq!(inbox.unseen_count(), 1);
    let noti = inbox.items()[0].clone();
    assert!(noti.noti_title.contains(&format!("#{}", link.order_id)));

    // Mark the single notification seen, server- and client-side
    let seen = admin
        .mark_notification_seen(
            noti.noti_id,
            &NotificationUpdate {
                noti_title: noti.noti_title.clone(),
                noti_describe: noti.noti_describe.clone(),
                noti_type: noti.noti_type,
                is_new: false,
            },
        )
        .await
        .expect("mark seen");
    assert!(!seen.is_new);
    inbox.mark_seen(noti.noti_id);
    assert_eq!(inbox.unseen_count(), 0);

    // Marking the order ready notifies the customer
    admin.mark_order_ready(link.order_id).await.expect("ready");
    let notis = customer
        .list_notifications()
        .await
        .expect("customer notifications");
    assert_eq!(notis.len(), 1);
    assert!(notis[0].is_new);

    customer
        .mark_all_notifications_seen()
        .await
        .expect("mark all seen");
    let notis = customer.list_notifications().await.expect("refetch");
    assert!(notis.iter().all(|n| !n.is_new));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let mut config = test_config();
    config.jwt.expiration_minutes = -5;
    let base_url = spawn_backend(config).await;

    let mut admin = ClientConfig::new(&base_url).build();
    admin.login("admin", "admin123").await.expect("login");

    // The token is already past its lifetime (beyond validation leeway)
    let err = admin.get_profile().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn test_image_upload_roundtrip() {
    let base_url = spawn_backend(test_config()).await;
    let admin = admin_client(&base_url).await;

    let bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];
    let upload = admin
        .upload_image("pho.png", bytes.clone())
        .await
        .expect("upload");
    assert!(upload.url.contains("/storage/files/"));
    assert_eq!(upload.size, bytes.len());

    // The public URL serves the stored bytes back
    let fetched = reqwest::get(&upload.url).await.expect("fetch");
    let content_type = fetched
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert_eq!(fetched.bytes().await.expect("body").to_vec(), bytes);

    // Unsupported extensions are rejected
    let err = admin
        .upload_image("script.exe", vec![1, 2, 3])
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}
