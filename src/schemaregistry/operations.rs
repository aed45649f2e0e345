//! Schema registry operation table.

use crate::operation::{
    HttpMethod, OperationDescriptor, ParamBinding as P, APPLICATION_JSON as JSON,
};

pub static GET_GLOBAL_RULE: OperationDescriptor = OperationDescriptor {
    operation_id: "getGlobalRule",
    method: HttpMethod::Get,
    path: "/rules/{rule}",
    params: &[P::path("rule", "rule")],
    accept: Some(JSON),
    content_type: None,
};

pub static UPDATE_GLOBAL_RULE: OperationDescriptor = OperationDescriptor {
    operation_id: "updateGlobalRule",
    method: HttpMethod::Put,
    path: "/rules/{rule}",
    params: &[
        P::path("rule", "rule"),
        P::body("type", "type").required(),
        P::body("config", "config").required(),
    ],
    accept: Some(JSON),
    content_type: Some(JSON),
};

pub static CREATE_SCHEMA_RULE: OperationDescriptor = OperationDescriptor {
    operation_id: "createSchemaRule",
    method: HttpMethod::Post,
    path: "/artifacts/{id}/rules",
    params: &[
        P::path("id", "id"),
        P::body("type", "type").required(),
        P::body("config", "config").required(),
    ],
    accept: Some(JSON),
    content_type: Some(JSON),
};

pub static GET_SCHEMA_RULE: OperationDescriptor = OperationDescriptor {
    operation_id: "getSchemaRule",
    method: HttpMethod::Get,
    path: "/artifacts/{id}/rules/{rule}",
    params: &[P::path("id", "id"), P::path("rule", "rule")],
    accept: Some(JSON),
    content_type: None,
};

pub static UPDATE_SCHEMA_RULE: OperationDescriptor = OperationDescriptor {
    operation_id: "updateSchemaRule",
    method: HttpMethod::Put,
    path: "/artifacts/{id}/rules/{rule}",
    params: &[
        P::path("id", "id"),
        P::path("rule", "rule"),
        P::body("type", "type").required(),
        P::body("config", "config").required(),
    ],
    accept: Some(JSON),
    content_type: Some(JSON),
};

pub static DELETE_SCHEMA_RULE: OperationDescriptor = OperationDescriptor {
    operation_id: "deleteSchemaRule",
    method: HttpMethod::Delete,
    path: "/artifacts/{id}/rules/{rule}",
    params: &[P::path("id", "id"), P::path("rule", "rule")],
    accept: None,
    content_type: None,
};

pub static SET_SCHEMA_STATE: OperationDescriptor = OperationDescriptor {
    operation_id: "setSchemaState",
    method: HttpMethod::Put,
    path: "/artifacts/{id}/state",
    params: &[P::path("id", "id"), P::body("state", "state").required()],
    accept: None,
    content_type: Some(JSON),
};

pub static SET_SCHEMA_VERSION_STATE: OperationDescriptor = OperationDescriptor {
    operation_id: "setSchemaVersionState",
    method: HttpMethod::Put,
    path: "/artifacts/{id}/versions/{version}/state",
    params: &[
        P::path("id", "id"),
        P::path("version", "version"),
        P::body("state", "state").required(),
    ],
    accept: None,
    content_type: Some(JSON),
};

pub static LIST_VERSIONS: OperationDescriptor = OperationDescriptor {
    operation_id: "listVersions",
    method: HttpMethod::Get,
    path: "/artifacts/{id}/versions",
    params: &[P::path("id", "id"), P::query("jsonformat", "jsonformat")],
    accept: Some(JSON),
    content_type: None,
};

pub static CREATE_VERSION: OperationDescriptor = OperationDescriptor {
    operation_id: "createVersion",
    method: HttpMethod::Post,
    path: "/artifacts/{id}/versions",
    params: &[P::path("id", "id"), P::body("schema", "schema")],
    accept: Some(JSON),
    content_type: Some(JSON),
};

pub static GET_VERSION: OperationDescriptor = OperationDescriptor {
    operation_id: "getVersion",
    method: HttpMethod::Get,
    path: "/artifacts/{id}/versions/{version}",
    params: &[P::path("id", "id"), P::path("version", "version")],
    accept: Some(JSON),
    content_type: None,
};

pub static DELETE_VERSION: OperationDescriptor = OperationDescriptor {
    operation_id: "deleteVersion",
    method: HttpMethod::Delete,
    path: "/artifacts/{id}/versions/{version}",
    params: &[P::path("id", "id"), P::path("version", "version")],
    accept: None,
    content_type: None,
};

pub static LIST_SCHEMAS: OperationDescriptor = OperationDescriptor {
    operation_id: "listSchemas",
    method: HttpMethod::Get,
    path: "/artifacts",
    params: &[P::query("jsonformat", "jsonformat")],
    accept: Some(JSON),
    content_type: None,
};

pub static CREATE_SCHEMA: OperationDescriptor = OperationDescriptor {
    operation_id: "createSchema",
    method: HttpMethod::Post,
    path: "/artifacts",
    params: &[
        P::body("schema", "schema"),
        P::header("xRegistryArtifactId", "X-Registry-ArtifactId"),
    ],
    accept: Some(JSON),
    content_type: Some(JSON),
};

pub static GET_LATEST_SCHEMA: OperationDescriptor = OperationDescriptor {
    operation_id: "getLatestSchema",
    method: HttpMethod::Get,
    path: "/artifacts/{id}",
    params: &[P::path("id", "id")],
    accept: Some(JSON),
    content_type: None,
};

pub static DELETE_SCHEMA: OperationDescriptor = OperationDescriptor {
    operation_id: "deleteSchema",
    method: HttpMethod::Delete,
    path: "/artifacts/{id}",
    params: &[P::path("id", "id")],
    accept: None,
    content_type: None,
};

pub static UPDATE_SCHEMA: OperationDescriptor = OperationDescriptor {
    operation_id: "updateSchema",
    method: HttpMethod::Put,
    path: "/artifacts/{id}",
    params: &[P::path("id", "id"), P::body("schema", "schema")],
    accept: Some(JSON),
    content_type: Some(JSON),
};

pub static OPERATIONS: &[&OperationDescriptor] = &[
    &GET_GLOBAL_RULE,
    &UPDATE_GLOBAL_RULE,
    &CREATE_SCHEMA_RULE,
    &GET_SCHEMA_RULE,
    &UPDATE_SCHEMA_RULE,
    &DELETE_SCHEMA_RULE,
    &SET_SCHEMA_STATE,
    &SET_SCHEMA_VERSION_STATE,
    &LIST_VERSIONS,
    &CREATE_VERSION,
    &GET_VERSION,
    &DELETE_VERSION,
    &LIST_SCHEMAS,
    &CREATE_SCHEMA,
    &GET_LATEST_SCHEMA,
    &DELETE_SCHEMA,
    &UPDATE_SCHEMA,
];
