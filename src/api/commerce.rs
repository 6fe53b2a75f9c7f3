//! Catalogue, cart, and checkout operations.
//!
//! Parameter structs serialize straight to the wire input. Unset optional
//! fields are omitted.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::{AccountUid, Client, ClientError};
use crate::clients::graphql::operations;

/// Identifies the cart to fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FetchCartParams {
    #[serde(rename = "accountUid", skip_serializing_if = "Option::is_none")]
    pub uid: Option<AccountUid>,
    #[serde(rename = "accountAnonymousUid", skip_serializing_if = "Option::is_none")]
    pub anonymous_uid: Option<String>,
    #[serde(rename = "orderId", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// An item to put into the account's cart.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AddItemToCartParams {
    #[serde(rename = "accountUid", skip_serializing_if = "Option::is_none")]
    pub uid: Option<AccountUid>,
    #[serde(rename = "accountAnonymousUid", skip_serializing_if = "Option::is_none")]
    pub anonymous_uid: Option<String>,
    #[serde(rename = "itemId")]
    pub item_id: String,
    #[serde(rename = "pricingId", skip_serializing_if = "Option::is_none")]
    pub pricing_id: Option<String>,
    /// Decimal quantity, sent as a string to keep its precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Replace the cart contents instead of adding to them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,
}

/// A coupon to apply to, or remove from, the account's cart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CouponParams {
    #[serde(rename = "accountUid", skip_serializing_if = "Option::is_none")]
    pub uid: Option<AccountUid>,
    #[serde(rename = "accountAnonymousUid", skip_serializing_if = "Option::is_none")]
    pub anonymous_uid: Option<String>,
    #[serde(rename = "couponCode")]
    pub coupon_code: String,
}

/// Starts checkout of the account's cart with a payment gateway.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CheckoutCartParams {
    #[serde(rename = "accountUid", skip_serializing_if = "Option::is_none")]
    pub uid: Option<AccountUid>,
    #[serde(rename = "accountAnonymousUid", skip_serializing_if = "Option::is_none")]
    pub anonymous_uid: Option<String>,
    #[serde(rename = "gatewayIdentifier", skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(rename = "gatewayOptions", skip_serializing_if = "Option::is_none")]
    pub gateway_options: Option<Map<String, Value>>,
    #[serde(rename = "orderId", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Hands the gateway's payment response back to DashX.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CapturePaymentParams {
    #[serde(rename = "accountUid", skip_serializing_if = "Option::is_none")]
    pub uid: Option<AccountUid>,
    #[serde(rename = "accountAnonymousUid", skip_serializing_if = "Option::is_none")]
    pub anonymous_uid: Option<String>,
    #[serde(rename = "gatewayResponse")]
    pub gateway_response: Map<String, Value>,
    #[serde(rename = "orderId", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

#[derive(Serialize)]
struct FetchItemInput<'a> {
    identifier: &'a str,
}

impl Client {
    /// Fetches a catalogue item with its pricing.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn fetch_item(&self, identifier: &str) -> Result<Value, ClientError> {
        self.request_input(&operations::FETCH_ITEM, &FetchItemInput { identifier }, "fetchItem")
            .await
    }

    /// Fetches the cart of an account or anonymous visitor.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn fetch_cart(&self, params: FetchCartParams) -> Result<Value, ClientError> {
        self.request_input(&operations::FETCH_CART, &params, "fetchCart")
            .await
    }

    /// Adds an item to a cart.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn add_item_to_cart(
        &self,
        params: AddItemToCartParams,
    ) -> Result<Value, ClientError> {
        self.request_input(&operations::ADD_ITEM_TO_CART, &params, "addItemToCart")
            .await
    }

    /// Applies a coupon to a cart.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn apply_coupon_to_cart(&self, params: CouponParams) -> Result<Value, ClientError> {
        self.request_input(
            &operations::APPLY_COUPON_TO_CART,
            &params,
            "applyCouponToCart",
        )
        .await
    }

    /// Removes a coupon from a cart.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn remove_coupon_from_cart(
        &self,
        params: CouponParams,
    ) -> Result<Value, ClientError> {
        self.request_input(
            &operations::REMOVE_COUPON_FROM_CART,
            &params,
            "removeCouponFromCart",
        )
        .await
    }

    /// Checks a cart out through a payment gateway.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn checkout_cart(&self, params: CheckoutCartParams) -> Result<Value, ClientError> {
        self.request_input(&operations::CHECKOUT_CART, &params, "checkoutCart")
            .await
    }

    /// Captures a payment after the gateway has answered.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn capture_payment(
        &self,
        params: CapturePaymentParams,
    ) -> Result<Value, ClientError> {
        self.request_input(&operations::CAPTURE_PAYMENT, &params, "capturePayment")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fetch_cart_params_use_wire_names() {
        let params = FetchCartParams {
            uid: Some(42_u64.into()),
            anonymous_uid: Some("anon".to_string()),
            order_id: Some("o1".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "accountUid": "42", "accountAnonymousUid": "anon", "orderId": "o1" })
        );
    }

    #[test]
    fn test_unset_cart_fields_are_omitted() {
        assert_eq!(
            serde_json::to_value(FetchCartParams::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_checkout_renames_gateway() {
        let params = CheckoutCartParams {
            uid: Some("u1".into()),
            gateway: Some("stripe".to_string()),
            ..CheckoutCartParams::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "accountUid": "u1", "gatewayIdentifier": "stripe" })
        );
    }

    #[test]
    fn test_add_item_params_shape() {
        let params = AddItemToCartParams {
            anonymous_uid: Some("anon".to_string()),
            item_id: "i1".to_string(),
            quantity: Some("2".to_string()),
            reset: Some(false),
            ..AddItemToCartParams::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "accountAnonymousUid": "anon", "itemId": "i1", "quantity": "2", "reset": false })
        );
    }

    #[test]
    fn test_capture_payment_always_sends_gateway_response() {
        let params = CapturePaymentParams {
            uid: Some(7_i32.into()),
            ..CapturePaymentParams::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "accountUid": "7", "gatewayResponse": {} })
        );
    }
}
