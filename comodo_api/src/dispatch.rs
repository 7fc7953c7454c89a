//! Maps (resource, operation) pairs to gateway endpoints and executes them.
//!
//! Each supported pair resolves to an immutable [`Endpoint`] descriptor:
//! HTTP method, path template, the parameter substituted into the path, and
//! a body-builder. [`Client::execute`] looks the descriptor up, builds the
//! request(s), and normalizes the response envelope.

use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::envelope::{normalize, Normalized};
use crate::search::{self, DeviceFilters};
use crate::types::{MalwareActionType, QuarantineActionType, RebootType, ScanType};
use crate::{Client, Error};

/// Entity categories exposed by the gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Device,
    DeviceGroup,
    Alert,
    Monitor,
    Security,
    Statistics,
    Procedure,
}

/// Verbs applied to a resource. Not every pair is valid; see [`lookup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    List,
    /// Device listing including security-client details. Served by the same
    /// search endpoint; the dedicated details endpoint is unreliable.
    ListWithCcs,
    Count,
    Get,
    Create,
    Delete,
    DeleteBulk,
    Rename,
    Reboot,
    UpdateAvDb,
    UpdateCcs,
    RunScan,
    StopScan,
    QuarantineAction,
    MalwareAction,
    Run,
    LogsByDevice,
    DeviceSummary,
}

/// One resolved invocation: a resource, a verb, and the caller-supplied
/// parameter values keyed by field name. Immutable once built.
#[derive(Clone, Debug)]
pub struct OperationRequest {
    pub resource: Resource,
    pub operation: Operation,
    params: Map<String, Value>,
}

impl OperationRequest {
    pub fn new(resource: Resource, operation: Operation) -> Self {
        Self {
            resource,
            operation,
            params: Map::new(),
        }
    }

    pub fn with_param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }

    fn str_param(&self, name: &'static str) -> Result<&str, Error> {
        match self.params.get(name) {
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(Error::ParameterType(name)),
            None => Err(Error::MissingParameter(name)),
        }
    }

    /// Integer parameter; numeric strings are accepted the way the original
    /// form fields supplied them.
    fn int_param(&self, name: &'static str) -> Result<i64, Error> {
        match self.params.get(name) {
            Some(Value::Number(n)) => n.as_i64().ok_or(Error::ParameterType(name)),
            Some(Value::String(s)) => {
                s.trim().parse().map_err(|_| Error::ParameterType(name))
            }
            Some(_) => Err(Error::ParameterType(name)),
            None => Err(Error::MissingParameter(name)),
        }
    }

    fn opt_int(&self, name: &'static str, default: i64) -> Result<i64, Error> {
        if self.params.contains_key(name) {
            self.int_param(name)
        } else {
            Ok(default)
        }
    }

    fn opt_str(&self, name: &'static str) -> Option<&str> {
        self.params.get(name).and_then(Value::as_str)
    }

    fn bool_param(&self, name: &'static str) -> bool {
        self.params
            .get(name)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Parameter substituted into a `{id}` path segment.
    fn path_param(&self, name: &'static str) -> Result<String, Error> {
        match self.params.get(name) {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(_) => Err(Error::ParameterType(name)),
            None => Err(Error::MissingParameter(name)),
        }
    }
}

type BodyFn = fn(&OperationRequest) -> Result<Value, Error>;
type SearchBodyFn = fn(&OperationRequest, i64, i64) -> Result<Value, Error>;

/// Immutable descriptor for one (resource, operation) endpoint.
#[derive(Debug)]
struct Endpoint {
    method: Method,
    /// Path template; may contain a single `{id}` segment.
    path: &'static str,
    /// Parameter substituted for `{id}`, when the template has one.
    id_param: Option<&'static str>,
    kind: Kind,
}

#[derive(Debug)]
enum Kind {
    /// POST search honoring `limit`/`returnAll`. Paginated searches walk
    /// 100-record pages; the rest satisfy return-all with one limit-500 call.
    Search {
        body: SearchBodyFn,
        paginated: bool,
        empty_note: &'static str,
    },
    /// Single request with an optional body built from the parameters.
    Fixed { body: Option<BodyFn> },
}

impl Endpoint {
    fn resolve_path(&self, req: &OperationRequest) -> Result<String, Error> {
        match self.id_param {
            Some(name) => Ok(self.path.replace("{id}", &req.path_param(name)?)),
            None => Ok(self.path.to_string()),
        }
    }
}

fn fixed(method: Method, path: &'static str, body: Option<BodyFn>) -> Endpoint {
    Endpoint {
        method,
        path,
        id_param: None,
        kind: Kind::Fixed { body },
    }
}

fn by_id(
    method: Method,
    path: &'static str,
    id_param: &'static str,
    body: Option<BodyFn>,
) -> Endpoint {
    Endpoint {
        method,
        path,
        id_param: Some(id_param),
        kind: Kind::Fixed { body },
    }
}

fn listing(path: &'static str, body: SearchBodyFn) -> Endpoint {
    Endpoint {
        method: Method::POST,
        path,
        id_param: None,
        kind: Kind::Search {
            body,
            paginated: false,
            empty_note: "",
        },
    }
}

/// The static (resource, operation) → endpoint table.
fn lookup(resource: Resource, operation: Operation) -> Result<Endpoint, Error> {
    use Operation as Op;
    use Resource as Res;

    let endpoint = match (resource, operation) {
        (Res::Device, Op::List) | (Res::Device, Op::ListWithCcs) => Endpoint {
            method: Method::POST,
            path: "/api/v2/itsm/devices/search",
            id_param: None,
            kind: Kind::Search {
                body: device_search_body,
                paginated: true,
                empty_note: "No devices found",
            },
        },
        (Res::Device, Op::Count) => fixed(
            Method::POST,
            "/api/v2/itsm/devices/search/count",
            Some(device_count_body),
        ),
        (Res::Device, Op::Get) => by_id(
            Method::GET,
            "/api/v2/itsm/devices/{id}/summary",
            "deviceId",
            None,
        ),
        (Res::Device, Op::Reboot) => {
            fixed(Method::POST, "/api/v2/itsm/devices/reboot", Some(reboot_body))
        }
        (Res::Device, Op::UpdateAvDb) => fixed(
            Method::POST,
            "/api/v2/itsm/devices/update-devices-av-db",
            Some(av_db_body),
        ),
        (Res::Device, Op::UpdateCcs) => fixed(
            Method::POST,
            "/api/v2/itsm/devices/update-ccs",
            Some(update_ccs_body),
        ),

        (Res::DeviceGroup, Op::List) => {
            listing("/api/v2/itsm/devices-groups/search", group_list_body)
        }
        (Res::DeviceGroup, Op::Get) => by_id(
            Method::GET,
            "/api/v2/itsm/devices-groups/{id}",
            "groupId",
            None,
        ),
        (Res::DeviceGroup, Op::Create) => fixed(
            Method::POST,
            "/api/v2/itsm/devices-groups",
            Some(group_create_body),
        ),
        (Res::DeviceGroup, Op::Delete) => by_id(
            Method::DELETE,
            "/api/v2/itsm/devices-groups/{id}",
            "groupId",
            None,
        ),
        (Res::DeviceGroup, Op::Rename) => by_id(
            Method::PUT,
            "/api/v2/itsm/devices-groups/{id}",
            "groupId",
            Some(group_rename_body),
        ),

        (Res::Alert, Op::List) => listing("/api/v2/itsm/alerts/search", alert_list_body),
        (Res::Alert, Op::Get) => {
            by_id(Method::GET, "/api/v2/itsm/alerts/{id}", "alertId", None)
        }
        (Res::Alert, Op::LogsByDevice) => by_id(
            Method::POST,
            "/api/v2/itsm/alerts/logs-by-device/{id}",
            "deviceId",
            Some(alert_logs_body),
        ),
        (Res::Alert, Op::Create) => {
            fixed(Method::POST, "/api/v2/itsm/alerts", Some(alert_create_body))
        }
        // Trailing slash is part of the documented route.
        (Res::Alert, Op::DeleteBulk) => fixed(
            Method::POST,
            "/api/v2/itsm/alerts/delete-bulk/",
            Some(alert_delete_body),
        ),

        (Res::Monitor, Op::List) => listing("/api/v2/itsm/monitors/search", monitor_list_body),
        (Res::Monitor, Op::Get) => {
            by_id(Method::GET, "/api/v2/itsm/monitors/{id}", "monitorId", None)
        }
        (Res::Monitor, Op::LogsByDevice) => by_id(
            Method::POST,
            "/api/v2/itsm/monitors/logs-by-device/{id}",
            "deviceId",
            Some(monitor_logs_body),
        ),
        (Res::Monitor, Op::Create) => fixed(
            Method::POST,
            "/api/v2/itsm/monitors",
            Some(monitor_create_body),
        ),

        (Res::Security, Op::RunScan) => fixed(
            Method::POST,
            "/api/v2/itsm/security/manage/scan-actions-devices",
            Some(run_scan_body),
        ),
        (Res::Security, Op::StopScan) => fixed(
            Method::POST,
            "/api/v2/itsm/security/manage/scan-actions-devices",
            Some(stop_scan_body),
        ),
        (Res::Security, Op::QuarantineAction) => fixed(
            Method::POST,
            "/api/v2/itsm/security/manage/quarantine-action",
            Some(quarantine_body),
        ),
        (Res::Security, Op::MalwareAction) => fixed(
            Method::POST,
            "/api/v2/itsm/security/manage/malware-actions-devices",
            Some(malware_body),
        ),

        (Res::Statistics, Op::DeviceSummary) => fixed(
            Method::GET,
            "/api/v2/itsm/statistics/device/summary",
            None,
        ),

        (Res::Procedure, Op::List) => {
            listing("/api/v2/itsm/procedures/search", procedure_list_body)
        }
        (Res::Procedure, Op::Get) => by_id(
            Method::GET,
            "/api/v2/itsm/procedures/{id}",
            "procedureId",
            None,
        ),
        (Res::Procedure, Op::Run) => by_id(
            Method::PUT,
            "/api/v2/itsm/procedures/run/{id}",
            "procedureId",
            Some(procedure_run_body),
        ),
        (Res::Procedure, Op::LogsByDevice) => by_id(
            Method::POST,
            "/api/v2/itsm/procedures/logs-by-device/{id}",
            "deviceId",
            Some(procedure_logs_body),
        ),
        (Res::Procedure, Op::Create) => fixed(
            Method::POST,
            "/api/v2/itsm/procedures",
            Some(procedure_create_body),
        ),

        _ => {
            return Err(Error::Unsupported {
                resource,
                operation,
            })
        }
    };
    Ok(endpoint)
}

/// Page size used by exhaustive pagination.
const PAGE_SIZE: i64 = 100;

/// Limit used when a non-paginated listing is asked to return all.
const RETURN_ALL_LIMIT: i64 = 500;

const DEFAULT_LIMIT: i64 = 50;

impl Client {
    /// Resolves one operation end to end: endpoint lookup, body
    /// construction, transport call(s), and envelope normalization.
    pub async fn execute(&self, req: &OperationRequest) -> Result<Normalized, Error> {
        let endpoint = lookup(req.resource, req.operation)?;
        let path = endpoint.resolve_path(req)?;

        match endpoint.kind {
            Kind::Search {
                body,
                paginated,
                empty_note,
            } => {
                let return_all = req.bool_param("returnAll");
                if paginated && return_all {
                    let records = self.collect_all(&path, req, body, empty_note).await?;
                    Ok(Normalized::Records(records))
                } else {
                    let limit = if return_all {
                        RETURN_ALL_LIMIT
                    } else {
                        req.opt_int("limit", DEFAULT_LIMIT)?
                    };
                    let payload = body(req, limit, 0)?;
                    let raw = self.request(Method::POST, &path, Some(&payload)).await?;
                    Ok(normalize(raw))
                }
            }
            Kind::Fixed { body } => {
                let payload = body.map(|build| build(req)).transpose()?;
                let raw = self
                    .request(endpoint.method.clone(), &path, payload.as_ref())
                    .await?;
                Ok(normalize(raw))
            }
        }
    }

    /// Walks fixed-size pages until a short page, accumulating all records.
    ///
    /// The end condition is heuristic: an exactly-full final page costs one
    /// extra (empty) request, which is tolerated. A bare-object page counts
    /// as empty. An empty accumulation yields the single informational
    /// placeholder record the legacy integration emitted, never an empty
    /// sequence.
    async fn collect_all(
        &self,
        path: &str,
        req: &OperationRequest,
        body: SearchBodyFn,
        empty_note: &'static str,
    ) -> Result<Vec<Value>, Error> {
        let mut all = Vec::new();
        let mut offset = 0;
        loop {
            let payload = body(req, PAGE_SIZE, offset)?;
            let raw = self.request(Method::POST, path, Some(&payload)).await?;
            let page = match normalize(raw) {
                Normalized::Records(records) => records,
                Normalized::Single(_) => Vec::new(),
            };
            let count = page.len() as i64;
            all.extend(page);
            if count < PAGE_SIZE {
                break;
            }
            offset += PAGE_SIZE;
        }
        if all.is_empty() {
            all.push(json!({ "message": empty_note }));
        }
        Ok(all)
    }
}

// Output columns requested from the listing endpoints, matching what the
// gateway's own console asks for.
const GROUP_COLUMNS: &[&str] = &["id", "name", "added_at", "owner_id", "company_id", "type"];
const GROUP_WRITE_COLUMNS: &[&str] = &["id", "name"];
const ALERT_COLUMNS: &[&str] = &[
    "id",
    "name",
    "created_by_username",
    "created",
    "updated_by_username",
    "modified",
];
const ALERT_LOG_COLUMNS: &[&str] = &["alertId", "status", "origin", "hitCounters"];
const MONITOR_COLUMNS: &[&str] = &[
    "name",
    "type",
    "profile_count",
    "created_by",
    "created",
    "updated_by",
    "modified",
];
const MONITOR_LOG_COLUMNS: &[&str] = &[
    "monitoring",
    "status",
    "hitCounters",
    "lastHitTime",
    "lastUpdateTime",
];
const PROCEDURE_COLUMNS: &[&str] = &[
    "name",
    "type",
    "status",
    "procedure_type",
    "added_by",
    "updated_by",
    "added_at",
    "updated_at",
    "description",
];
const PROCEDURE_LOG_COLUMNS: &[&str] = &[
    "procedure",
    "startedAt",
    "finishedAt",
    "profile",
    "launchType",
    "runner",
    "status",
    "lastUpdateTime",
    "executionId",
];

const REBOOT_WARNING: &str =
    "Your device will reboot in 5 minutes because it is required by your administrator";

fn device_filters(req: &OperationRequest) -> Result<DeviceFilters, Error> {
    let mut filters = DeviceFilters::default();
    if let Some(name) = req.opt_str("companyName") {
        filters.company_name = Some(name.to_string());
    }
    if let Some(ids) = req.opt_str("companyIds") {
        filters.company_ids = Some(ids.to_string());
    }
    if let Some(name) = req.opt_str("deviceName") {
        filters.device_name = Some(name.to_string());
    }
    if let Some(value) = req.params.get("osType") {
        let list = value.as_array().ok_or(Error::ParameterType("osType"))?;
        for code in list {
            filters
                .os_types
                .push(code.as_i64().ok_or(Error::ParameterType("osType"))?);
        }
    }
    if let Some(value) = req.params.get("onlineStatus") {
        filters.online_status =
            Some(value.as_i64().ok_or(Error::ParameterType("onlineStatus"))?);
    }
    if let Some(value) = req.params.get("securityClientStatus") {
        let list = value
            .as_array()
            .ok_or(Error::ParameterType("securityClientStatus"))?;
        for code in list {
            filters.security_client_statuses.push(
                code.as_i64()
                    .ok_or(Error::ParameterType("securityClientStatus"))?,
            );
        }
    }
    if let Some(ids) = req.opt_str("groupIds") {
        filters.group_ids = Some(ids.to_string());
    }
    Ok(filters)
}

fn device_search_body(req: &OperationRequest, limit: i64, offset: i64) -> Result<Value, Error> {
    Ok(device_filters(req)?.search_body(limit, offset))
}

// The count endpoint takes the same `$S` document with a fixed window.
fn device_count_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(device_filters(req)?.search_body(20, 0))
}

fn id_list_param(req: &OperationRequest, name: &'static str) -> Result<Vec<Value>, Error> {
    Ok(search::parse_id_list(req.str_param(name)?))
}

fn reboot_body(req: &OperationRequest) -> Result<Value, Error> {
    let device_ids = id_list_param(req, "deviceIds")?;
    let reboot_type = req.opt_int("rebootType", RebootType::WithWarning.code())?;
    let reboot = if reboot_type == RebootType::WithWarning.code() {
        json!({
            "type": reboot_type,
            "timeout": req.opt_int("rebootTimeout", 300)?,
            "message": req.opt_str("rebootMessage").unwrap_or(REBOOT_WARNING),
        })
    } else {
        json!({ "type": reboot_type })
    };
    Ok(json!({ "$R": { "deviceIds": device_ids, "reboot": reboot } }))
}

fn av_db_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({ "$R": { "devices": id_list_param(req, "deviceIds")? } }))
}

fn update_ccs_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({
        "$R": {
            "devices": id_list_param(req, "deviceIds")?,
            "reboot": { "type": 1, "timeout": 300, "message": REBOOT_WARNING },
        }
    }))
}

fn group_list_body(_req: &OperationRequest, limit: i64, offset: i64) -> Result<Value, Error> {
    Ok(search::list_body(GROUP_COLUMNS, limit, offset, false))
}

fn group_create_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({
        "$R": {
            "groupData": {
                "name": req.str_param("name")?,
                "companyId": req.int_param("companyId")?,
            },
            "devicesList": [],
        },
        "$O": { "columns": GROUP_WRITE_COLUMNS },
    }))
}

fn group_rename_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({
        "$R": { "name": req.str_param("name")? },
        "$O": { "columns": GROUP_WRITE_COLUMNS },
    }))
}

fn alert_list_body(_req: &OperationRequest, limit: i64, offset: i64) -> Result<Value, Error> {
    Ok(search::list_body(ALERT_COLUMNS, limit, offset, true))
}

fn alert_logs_body(_req: &OperationRequest) -> Result<Value, Error> {
    Ok(search::list_body(ALERT_LOG_COLUMNS, 40, 0, false))
}

fn alert_create_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({
        "$R": {
            "name": req.str_param("name")?,
            "description": req.opt_str("description").unwrap_or_default(),
        },
        "$O": { "columns": ALERT_COLUMNS },
    }))
}

fn alert_delete_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({ "$R": { "alertsIds": id_list_param(req, "alertIds")? } }))
}

fn monitor_list_body(_req: &OperationRequest, limit: i64, offset: i64) -> Result<Value, Error> {
    Ok(search::list_body(MONITOR_COLUMNS, limit, offset, true))
}

fn monitor_logs_body(_req: &OperationRequest) -> Result<Value, Error> {
    Ok(search::list_body(MONITOR_LOG_COLUMNS, 20, 0, false))
}

fn monitor_create_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({
        "$O": { "columns": MONITOR_COLUMNS },
        "$R": {
            "name": req.str_param("name")?,
            "description": req.opt_str("description").unwrap_or_default(),
            "category_id": req.opt_int("categoryId", 1)?,
        },
    }))
}

fn run_scan_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({
        "$R": {
            "devices": id_list_param(req, "deviceIds")?,
            "action": req.opt_int("scanType", ScanType::Full.code())?,
        }
    }))
}

// Action 0 stops a running scan.
fn stop_scan_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({
        "$R": { "devices": id_list_param(req, "deviceIds")?, "action": 0 }
    }))
}

fn quarantine_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({
        "$R": {
            "deviceId": req.int_param("deviceId")?,
            "hash": req.str_param("hash")?,
            "actionType": req.opt_int("actionType", QuarantineActionType::Delete.code())?,
            "path": "string",
        }
    }))
}

fn malware_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({
        "$R": {
            "devices": id_list_param(req, "deviceIds")?,
            "action": req.opt_int("malwareAction", MalwareActionType::Clean.code())?,
        }
    }))
}

fn procedure_list_body(_req: &OperationRequest, limit: i64, offset: i64) -> Result<Value, Error> {
    Ok(search::list_body(PROCEDURE_COLUMNS, limit, offset, true))
}

fn procedure_logs_body(_req: &OperationRequest) -> Result<Value, Error> {
    Ok(search::list_body(PROCEDURE_LOG_COLUMNS, 20, 0, false))
}

fn procedure_run_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({
        "$R": {
            "target": 2,
            "deviceIds": id_list_param(req, "deviceIds")?,
            "userType": 1,
            "procedureType": 1,
            "parameters": [],
        }
    }))
}

fn procedure_create_body(req: &OperationRequest) -> Result<Value, Error> {
    Ok(json!({
        "$R": {
            "name": req.str_param("name")?,
            "id_category": 1,
            "description": req.opt_str("description").unwrap_or_default(),
        },
        "$O": { "columns": GROUP_WRITE_COLUMNS },
    }))
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::{lookup, Kind, Operation, OperationRequest, Resource};
    use crate::Error;

    #[test]
    fn table_maps_device_operations() {
        let ep = lookup(Resource::Device, Operation::List).unwrap();
        assert_eq!(ep.method, Method::POST);
        assert_eq!(ep.path, "/api/v2/itsm/devices/search");
        assert!(matches!(ep.kind, Kind::Search { paginated: true, .. }));

        let ep = lookup(Resource::Device, Operation::Get).unwrap();
        assert_eq!(ep.method, Method::GET);
        assert_eq!(ep.path, "/api/v2/itsm/devices/{id}/summary");
        assert_eq!(ep.id_param, Some("deviceId"));
    }

    #[test]
    fn table_maps_group_rename_to_put() {
        let ep = lookup(Resource::DeviceGroup, Operation::Rename).unwrap();
        assert_eq!(ep.method, Method::PUT);
        assert_eq!(ep.path, "/api/v2/itsm/devices-groups/{id}");
    }

    #[test]
    fn table_keeps_delete_bulk_trailing_slash() {
        let ep = lookup(Resource::Alert, Operation::DeleteBulk).unwrap();
        assert_eq!(ep.path, "/api/v2/itsm/alerts/delete-bulk/");
    }

    #[test]
    fn table_rejects_unmapped_pairs() {
        let err = lookup(Resource::Statistics, Operation::Reboot).unwrap_err();
        assert!(matches!(err, Error::Unsupported { .. }));
    }

    #[test]
    fn path_resolution_substitutes_the_id() {
        let ep = lookup(Resource::Procedure, Operation::Run).unwrap();
        let req = OperationRequest::new(Resource::Procedure, Operation::Run)
            .with_param("procedureId", "42")
            .with_param("deviceIds", "1,2");
        assert_eq!(
            ep.resolve_path(&req).unwrap(),
            "/api/v2/itsm/procedures/run/42"
        );
    }

    #[test]
    fn path_resolution_requires_the_id() {
        let ep = lookup(Resource::Device, Operation::Get).unwrap();
        let req = OperationRequest::new(Resource::Device, Operation::Get);
        assert!(matches!(
            ep.resolve_path(&req),
            Err(Error::MissingParameter("deviceId"))
        ));
    }

    #[test]
    fn reboot_immediate_omits_timeout_and_message() {
        let req = OperationRequest::new(Resource::Device, Operation::Reboot)
            .with_param("deviceIds", "3, 7,9")
            .with_param("rebootType", 1);
        assert_eq!(
            super::reboot_body(&req).unwrap(),
            json!({ "$R": { "deviceIds": [3, 7, 9], "reboot": { "type": 1 } } })
        );
    }

    #[test]
    fn reboot_with_warning_fills_defaults() {
        let req = OperationRequest::new(Resource::Device, Operation::Reboot)
            .with_param("deviceIds", "5");
        assert_eq!(
            super::reboot_body(&req).unwrap(),
            json!({
                "$R": {
                    "deviceIds": [5],
                    "reboot": {
                        "type": 2,
                        "timeout": 300,
                        "message": super::REBOOT_WARNING,
                    },
                }
            })
        );
    }

    #[test]
    fn reboot_with_warning_uses_supplied_values() {
        let req = OperationRequest::new(Resource::Device, Operation::Reboot)
            .with_param("deviceIds", "5")
            .with_param("rebootType", 2)
            .with_param("rebootTimeout", 60)
            .with_param("rebootMessage", "going down");
        let body = super::reboot_body(&req).unwrap();
        assert_eq!(body.pointer("/$R/reboot/timeout"), Some(&json!(60)));
        assert_eq!(body.pointer("/$R/reboot/message"), Some(&json!("going down")));
    }

    #[test]
    fn quarantine_body_keeps_the_placeholder_path() {
        let req = OperationRequest::new(Resource::Security, Operation::QuarantineAction)
            .with_param("deviceId", "17")
            .with_param("hash", "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        let body = super::quarantine_body(&req).unwrap();
        assert_eq!(body.pointer("/$R/deviceId"), Some(&json!(17)));
        assert_eq!(body.pointer("/$R/actionType"), Some(&json!(2)));
        assert_eq!(body.pointer("/$R/path"), Some(&json!("string")));
    }

    #[test]
    fn missing_required_parameter_is_reported_by_name() {
        let req = OperationRequest::new(Resource::Device, Operation::Reboot);
        assert!(matches!(
            super::reboot_body(&req),
            Err(Error::MissingParameter("deviceIds"))
        ));
    }

    #[test]
    fn int_params_accept_numeric_strings() {
        let req = OperationRequest::new(Resource::Security, Operation::QuarantineAction)
            .with_param("deviceId", "17")
            .with_param("hash", "h");
        assert_eq!(req.int_param("deviceId").unwrap(), 17);

        let req = req.with_param("deviceId", json!({}));
        assert!(matches!(
            req.int_param("deviceId"),
            Err(Error::ParameterType("deviceId"))
        ));
    }
}
