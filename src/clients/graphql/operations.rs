//! GraphQL documents for every DashX operation.
//!
//! Documents are opaque to the SDK: they are sent verbatim as the `query`
//! member of the request body, with the parameters under `variables.input`.

/// A named GraphQL request template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    /// The operation name, also the key used in logs.
    pub name: &'static str,
    /// The GraphQL document.
    pub document: &'static str,
}

macro_rules! item_fields {
    () => {
        "
    id
    installationId
    name
    identifier
    description
    createdAt
    updatedAt
    pricings {
      id
      kind
      amount
      originalAmount
      isRecurring
      recurringInterval
      recurringIntervalUnit
      appleProductIdentifier
      googleProductIdentifier
      currencyCode
      createdAt
      updatedAt
    }
"
    };
}

macro_rules! cart_fields {
    () => {
        concat!(
            "
    id
    status
    subtotal
    discount
    tax
    total
    gatewayMeta
    currencyCode
    orderItems {
      id
      quantity
      unitPrice
      subtotal
      discount
      tax
      total
      custom
      currencyCode
      item {",
            item_fields!(),
            "      }
    }
    couponRedemptions {
      coupon {
        name
        identifier
        discountType
        discountAmount
        currencyCode
        expiresAt
      }
    }
"
        )
    };
}

macro_rules! asset_fields {
    () => {
        "
    id
    resourceId
    attributeId
    storageProviderId
    uploaderId
    name
    size
    mimeType
    data
    uploadStatus
    processingStatus
    url
    createdAt
    updatedAt
"
    };
}

pub const TRACK_EVENT: Operation = Operation {
    name: "TrackEvent",
    document: "mutation TrackEvent($input: TrackEventInput!) {
  trackEvent(input: $input) {
    success
  }
}",
};

pub const IDENTIFY_ACCOUNT: Operation = Operation {
    name: "IdentifyAccount",
    document: "mutation IdentifyAccount($input: IdentifyAccountInput!) {
  identifyAccount(input: $input) {
    id
  }
}",
};

pub const ADD_CONTENT: Operation = Operation {
    name: "AddContent",
    document: "mutation AddContent($input: AddContentInput!) {
  addContent(input: $input) {
    id
    identifier
    position
    data
  }
}",
};

pub const EDIT_CONTENT: Operation = Operation {
    name: "EditContent",
    document: "mutation EditContent($input: EditContentInput!) {
  editContent(input: $input) {
    id
    identifier
    position
    data
  }
}",
};

pub const SEARCH_CONTENT: Operation = Operation {
    name: "SearchContent",
    document: "query SearchContent($input: SearchContentInput!) {
  searchContent(input: $input)
}",
};

pub const FETCH_CONTENT: Operation = Operation {
    name: "FetchContent",
    document: "query FetchContent($input: FetchContentInput!) {
  fetchContent(input: $input)
}",
};

pub const SEARCH_RECORDS: Operation = Operation {
    name: "SearchRecords",
    document: "query SearchRecords($input: SearchRecordsInput!) {
  searchRecords(input: $input)
}",
};

pub const FETCH_RECORD: Operation = Operation {
    name: "FetchRecord",
    document: "query FetchRecord($input: FetchRecordInput!) {
  fetchRecord(input: $input)
}",
};

pub const CREATE_DELIVERY: Operation = Operation {
    name: "CreateDelivery",
    document: "mutation CreateDelivery($input: CreateDeliveryInput!) {
  createDelivery(input: $input) {
    id
  }
}",
};

pub const FETCH_ITEM: Operation = Operation {
    name: "FetchItem",
    document: concat!(
        "query FetchItem($input: FetchItemInput) {
  fetchItem(input: $input) {",
        item_fields!(),
        "  }
}"
    ),
};

pub const FETCH_CART: Operation = Operation {
    name: "FetchCart",
    document: concat!(
        "query FetchCart($input: FetchCartInput!) {
  fetchCart(input: $input) {",
        cart_fields!(),
        "  }
}"
    ),
};

pub const ADD_ITEM_TO_CART: Operation = Operation {
    name: "AddItemToCart",
    document: concat!(
        "mutation AddItemToCart($input: AddItemToCartInput!) {
  addItemToCart(input: $input) {",
        cart_fields!(),
        "  }
}"
    ),
};

pub const APPLY_COUPON_TO_CART: Operation = Operation {
    name: "ApplyCouponToCart",
    document: concat!(
        "mutation ApplyCouponToCart($input: ApplyCouponToCartInput!) {
  applyCouponToCart(input: $input) {",
        cart_fields!(),
        "  }
}"
    ),
};

pub const REMOVE_COUPON_FROM_CART: Operation = Operation {
    name: "RemoveCouponFromCart",
    document: concat!(
        "mutation RemoveCouponFromCart($input: RemoveCouponFromCartInput!) {
  removeCouponFromCart(input: $input) {",
        cart_fields!(),
        "  }
}"
    ),
};

pub const CHECKOUT_CART: Operation = Operation {
    name: "CheckoutCart",
    document: concat!(
        "mutation CheckoutCart($input: CheckoutCartInput!) {
  checkoutCart(input: $input) {",
        cart_fields!(),
        "  }
}"
    ),
};

pub const CAPTURE_PAYMENT: Operation = Operation {
    name: "CapturePayment",
    document: concat!(
        "mutation CapturePayment($input: CapturePaymentInput!) {
  capturePayment(input: $input) {",
        cart_fields!(),
        "  }
}"
    ),
};

pub const FETCH_ASSET: Operation = Operation {
    name: "Asset",
    document: concat!(
        "query Asset($id: UUID!) {
  asset(id: $id) {",
        asset_fields!(),
        "  }
}"
    ),
};

pub const LIST_ASSETS: Operation = Operation {
    name: "AssetsList",
    document: concat!(
        "query AssetsList($filter: AssetsListFilterInput, $order: [AssetsListOrderInput!], $limit: Int, $page: Int) {
  assetsList(filter: $filter, order: $order, limit: $limit, page: $page) {",
        asset_fields!(),
        "  }
}"
    ),
};

pub const FETCH_STORED_PREFERENCES: Operation = Operation {
    name: "FetchStoredPreferences",
    document: "query FetchStoredPreferences($input: FetchStoredPreferencesInput) {
  fetchStoredPreferences(input: $input) {
    preferenceData
  }
}",
};

pub const SAVE_STORED_PREFERENCES: Operation = Operation {
    name: "SaveStoredPreferences",
    document: "mutation SaveStoredPreferences($input: SaveStoredPreferencesInput) {
  saveStoredPreferences(input: $input) {
    success
  }
}",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_declare_their_operation_name() {
        for operation in [
            TRACK_EVENT,
            IDENTIFY_ACCOUNT,
            ADD_CONTENT,
            EDIT_CONTENT,
            SEARCH_CONTENT,
            FETCH_CONTENT,
            SEARCH_RECORDS,
            FETCH_RECORD,
            CREATE_DELIVERY,
            FETCH_ITEM,
            FETCH_CART,
            ADD_ITEM_TO_CART,
            APPLY_COUPON_TO_CART,
            REMOVE_COUPON_FROM_CART,
            CHECKOUT_CART,
            CAPTURE_PAYMENT,
            FETCH_ASSET,
            LIST_ASSETS,
            FETCH_STORED_PREFERENCES,
            SAVE_STORED_PREFERENCES,
        ] {
            let header = format!(" {}(", operation.name);
            assert!(
                operation.document.contains(&header),
                "{} document does not declare its name",
                operation.name
            );
        }
    }

    #[test]
    fn test_cart_documents_embed_item_fields() {
        assert!(FETCH_CART.document.contains("couponRedemptions"));
        assert!(CHECKOUT_CART.document.contains("pricings {"));
        assert!(FETCH_ITEM.document.contains("recurringIntervalUnit"));
    }
}
