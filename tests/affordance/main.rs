#![allow(dead_code)]


use hypermedia_affordances::affordance::{
    AffordanceHandler, HttpMethod, RouteDescriptor, SchemaRef,
};

pub struct Order;
pub struct OrderRequest;

pub struct OrderController;

#[derive(Debug, Clone, PartialEq)]
pub enum OrderOperation {
    Show { id: u64 },
    Cancel { id: u64 },
    Reorder { id: u64 },
    Search { page: u32 },
    Recalculate { id: u64 },
    Edit { id: u64 },
    List,
}

impl AffordanceHandler for OrderController {
    type Operation = OrderOperation;

    fn handler_name() -> &'static str {
        "OrderController"
    }

    fn base_path() -> &'static str {
        "/orders"
    }

    fn route(operation: &OrderOperation) -> Option<RouteDescriptor> {
        match operation {
            OrderOperation::Show { .. } => Some(
                RouteDescriptor::new("show", HttpMethod::Get, "/{id}")
                    .with_output(SchemaRef::of::<Order>()),
            ),
            OrderOperation::Cancel { .. } => Some(RouteDescriptor::new(
                "cancel",
                HttpMethod::Delete,
                "/{id}/cancel",
            )),
            OrderOperation::Reorder { .. } => Some(
                RouteDescriptor::new("reorder", HttpMethod::Post, "/{id}/reorder")
                    .with_input(SchemaRef::of::<OrderRequest>())
                    .with_output(SchemaRef::of::<Order>()),
            ),
            OrderOperation::Search { .. } => Some(RouteDescriptor::new(
                "search",
                HttpMethod::Get,
                "/search{?page,size}",
            )),
            OrderOperation::Recalculate { .. } => None,
            OrderOperation::Edit { .. } => {
                Some(RouteDescriptor::new("edit", HttpMethod::Put, "/{id}/"))
            }
            OrderOperation::List => Some(RouteDescriptor::new(
                "list",
                HttpMethod::Get,
                "{?page,size}",
            )),
        }
    }
}

pub struct CustomerController;

pub enum CustomerOperation {
    Update { id: u64 },
    Archive { id: u64 },
    Broken,
}

impl AffordanceHandler for CustomerController {
    type Operation = CustomerOperation;

    fn handler_name() -> &'static str {
        "CustomerController"
    }

    fn route(operation: &CustomerOperation) -> Option<RouteDescriptor> {
        match operation {
            CustomerOperation::Update { .. } => Some(
                RouteDescriptor::new("update", HttpMethod::Put, "/customers/{id}")
                    .with_input(SchemaRef::new("Customer").with_schema(serde_json::json!({
                        "type": "object",
                        "properties": { "name": { "type": "string" } }
                    }))),
            ),
            CustomerOperation::Archive { .. } => Some(RouteDescriptor::new(
                "archive",
                HttpMethod::Post,
                "customers/{id}/archive",
            )),
            CustomerOperation::Broken => Some(RouteDescriptor::new(
                "broken",
                HttpMethod::Get,
                "/customers/{id",
            )),
        }
    }
}

pub struct ReportController;

pub enum ReportOperation {
    Unnamed,
    Unmapped,
    QueryOnly,
}

impl AffordanceHandler for ReportController {
    type Operation = ReportOperation;

    fn handler_name() -> &'static str {
        "ReportController"
    }

    fn route(operation: &ReportOperation) -> Option<RouteDescriptor> {
        match operation {
            ReportOperation::Unnamed => {
                Some(RouteDescriptor::new("  ", HttpMethod::Get, "/reports"))
            }
            ReportOperation::Unmapped => Some(RouteDescriptor::new("export", HttpMethod::Get, "")),
            ReportOperation::QueryOnly => Some(RouteDescriptor::new(
                "filter",
                HttpMethod::Get,
                "{?from,to}",
            )),
        }
    }
}
