//! Backend endpoint paths
//!
//! One constant per backend operation, grouped by resource. Paths are joined
//! onto the configured base URL by [`HttpClient`](crate::HttpClient).

pub mod user {
    pub const REGISTER: &str = "user/register";
    pub const LOGIN: &str = "user/login";
    pub const GET_INFO: &str = "user/get-user-info";
    pub const UPDATE_INFO: &str = "user/update-user";
    pub const CHANGE_PASSWORD: &str = "user/change-password";
    pub const FORGOT_PASSWORD: &str = "user/forgot-password";
    pub const LIST: &str = "user/get-list-user";
}

pub mod item {
    pub const CREATE: &str = "item/create-new-item";
    pub const UPDATE: &str = "item/update-item";
    pub const LIST: &str = "item/get-list-item";
    pub const INFO: &str = "item/get-item-info";
    pub const DELETE: &str = "item/delete-item";
}

pub mod order {
    pub const CREATE: &str = "order/create-new-order";
    pub const LIST: &str = "order/get-list-order";
    pub const LIST_BY_USER: &str = "order/get-list-order-by-user";
    pub const INFO: &str = "order/get-order-info";
    pub const TO_DELIVERY: &str = "order/change-order-to-delivery";
    pub const TO_RECEIVED: &str = "order/change-order-to-received";
    pub const TO_CANCEL: &str = "order/change-order-to-cancel";
}

pub mod payment {
    pub const CREATE_LINK: &str = "payment/create-payment-link";
}

pub mod invoice {
    pub const LIST: &str = "invoice/invoices";
}

pub mod notification {
    pub const LIST: &str = "notification/get-all-notifications";
    pub const CREATE: &str = "notification/create-notification";
    pub const MARK_ALL_SEEN: &str = "notification/mark-all-as-seen";
    pub const MARK_SEEN: &str = "notification/update-notification";
}

pub mod storage {
    pub const UPLOAD: &str = "storage/upload";
}
