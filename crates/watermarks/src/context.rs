// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::sync::Arc;

use minijinja::{
    Value,
    value::{Enumerator, Object},
};

use crate::WatermarkDecision;

impl Object for WatermarkDecision {
    fn get_value(self: &Arc<Self>, name: &Value) -> Option<Value> {
        match name.as_str()? {
            "brand" => Some(Value::from_serialize(self.brand_view())),
            "product" => Some(Value::from_serialize(self.product_view())),
            "powered_by" => Some(Value::from_serialize(self.powered_by_view())),
            _ => None,
        }
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Str(&["brand", "product", "powered_by"])
    }
}
