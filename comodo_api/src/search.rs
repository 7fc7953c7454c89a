//! Construction of the `$S` search document sent to the listing endpoints.

use serde_json::{json, Map, Value};

use crate::types::{OnlineStatus, OsType, SecurityClientStatus};

/// Sort order inside a `$S.sort` entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Optional device-search filters.
///
/// Unset fields emit no predicate, with one exception: the API rejects a
/// device search without an `os_type` predicate, so an empty OS selection
/// expands to every known OS-type code. Fields hold wire codes directly; the
/// typed `with_*` builders are the ergonomic way to set them.
#[derive(Clone, Debug, Default)]
pub struct DeviceFilters {
    /// Company name, matched as a case-insensitive substring.
    pub company_name: Option<String>,
    /// Comma-separated company IDs, e.g. `"3, 7,9"`.
    pub company_ids: Option<String>,
    /// Device name, matched as a case-insensitive substring.
    pub device_name: Option<String>,
    /// OS-type codes. Empty expands to [`OsType::ALL`].
    pub os_types: Vec<i64>,
    /// Online-status code. `0` ("all") emits no predicate.
    pub online_status: Option<i64>,
    /// Security-client-status codes.
    pub security_client_statuses: Vec<i64>,
    /// Comma-separated group IDs.
    pub group_ids: Option<String>,
    /// Sort override. Defaults to name ascending.
    pub sort: Option<(String, SortDirection)>,
}

impl DeviceFilters {
    pub fn with_company_name(mut self, name: &str) -> Self {
        self.company_name = Some(name.to_string());
        self
    }

    pub fn with_company_ids(mut self, ids: &str) -> Self {
        self.company_ids = Some(ids.to_string());
        self
    }

    pub fn with_device_name(mut self, name: &str) -> Self {
        self.device_name = Some(name.to_string());
        self
    }

    pub fn with_os_type(mut self, os: OsType) -> Self {
        self.os_types.push(os.code());
        self
    }

    pub fn with_online_status(mut self, status: OnlineStatus) -> Self {
        self.online_status = Some(status.code());
        self
    }

    pub fn with_security_client_status(mut self, status: SecurityClientStatus) -> Self {
        self.security_client_statuses.push(status.code());
        self
    }

    pub fn with_group_ids(mut self, ids: &str) -> Self {
        self.group_ids = Some(ids.to_string());
        self
    }

    pub fn with_sort(mut self, field: &str, direction: SortDirection) -> Self {
        self.sort = Some((field.to_string(), direction));
        self
    }

    /// Builds the search request body for one page.
    pub fn search_body(&self, limit: i64, offset: i64) -> Value {
        let mut attributes = Map::new();

        let os_codes: Vec<i64> = if self.os_types.is_empty() {
            OsType::ALL.iter().map(|os| os.code()).collect()
        } else {
            self.os_types.clone()
        };
        attributes.insert("os_type".into(), attribute(json!(os_codes), "in:enum"));

        if let Some(name) = non_empty(&self.company_name) {
            attributes.insert("companyName".into(), attribute(json!(name), "ilike:string"));
        }
        if let Some(ids) = non_empty(&self.company_ids) {
            attributes.insert(
                "companyIds".into(),
                attribute(Value::Array(parse_id_list(ids)), "in:int"),
            );
        }
        if let Some(name) = non_empty(&self.device_name) {
            attributes.insert("name".into(), attribute(json!(name), "ilike:string"));
        }
        match self.online_status {
            // 0 means "all": no predicate at all, never a match on code 0.
            None | Some(0) => {}
            Some(code) => {
                attributes.insert("online_status".into(), attribute(json!([code]), "in:enum"));
            }
        }
        if !self.security_client_statuses.is_empty() {
            attributes.insert(
                "securityClientStatus".into(),
                attribute(json!(self.security_client_statuses), "in:enum"),
            );
        }
        if let Some(ids) = non_empty(&self.group_ids) {
            attributes.insert(
                "groupIds".into(),
                attribute(Value::Array(parse_id_list(ids)), "in:int"),
            );
        }

        let mut sort = Map::new();
        match &self.sort {
            Some((field, direction)) => {
                sort.insert(field.clone(), Value::from(direction.as_str()));
            }
            None => {
                sort.insert("name".into(), Value::from(SortDirection::Asc.as_str()));
            }
        }

        json!({
            "$S": {
                "pagination": { "limit": clamp_limit(limit), "offset": offset },
                "attributes": attributes,
                "sort": sort,
            }
        })
    }
}

/// Builds the `$O` + `$S` body used by the plain listing endpoints. `sorted`
/// appends the conventional name-ascending sort; the log listings omit it.
pub(crate) fn list_body(columns: &[&str], limit: i64, offset: i64, sorted: bool) -> Value {
    let mut search = Map::new();
    search.insert(
        "pagination".into(),
        json!({ "limit": clamp_limit(limit), "offset": offset }),
    );
    if sorted {
        search.insert("sort".into(), json!({ "name": "asc" }));
    }
    json!({ "$O": { "columns": columns }, "$S": search })
}

fn attribute(value: Value, match_type: &str) -> Value {
    json!({ "value": value, "type": match_type })
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Splits a comma-separated ID list, trimming each token. Tokens that do not
/// parse as integers pass through as JSON null; the API is the validator.
pub fn parse_id_list(raw: &str) -> Vec<Value> {
    raw.split(',')
        .map(str::trim)
        .map(|token| match token.parse::<i64>() {
            Ok(id) => Value::from(id),
            Err(_) => Value::Null,
        })
        .collect()
}

/// Clamps a caller-supplied limit into the range the listing endpoints accept.
pub(crate) fn clamp_limit(limit: i64) -> i64 {
    limit.clamp(1, 500)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{clamp_limit, list_body, parse_id_list, DeviceFilters, SortDirection};
    use crate::types::{OnlineStatus, OsType, SecurityClientStatus};

    fn attributes(body: &Value) -> &Value {
        body.pointer("/$S/attributes").unwrap()
    }

    #[test]
    fn os_type_defaults_to_full_set() {
        let body = DeviceFilters::default().search_body(50, 0);
        assert_eq!(
            attributes(&body)["os_type"],
            json!({ "value": [1, 2, 3, 4, 5], "type": "in:enum" })
        );
    }

    #[test]
    fn os_type_subset_is_preserved() {
        let body = DeviceFilters::default()
            .with_os_type(OsType::Windows)
            .with_os_type(OsType::Linux)
            .search_body(50, 0);
        assert_eq!(
            attributes(&body)["os_type"],
            json!({ "value": [1, 3], "type": "in:enum" })
        );
    }

    #[test]
    fn online_status_all_emits_no_predicate() {
        let body = DeviceFilters::default()
            .with_online_status(OnlineStatus::All)
            .search_body(50, 0);
        assert!(attributes(&body).get("online_status").is_none());

        let body = DeviceFilters::default()
            .with_online_status(OnlineStatus::Offline)
            .search_body(50, 0);
        assert_eq!(
            attributes(&body)["online_status"],
            json!({ "value": [2], "type": "in:enum" })
        );
    }

    #[test]
    fn substring_filters_use_ilike() {
        let body = DeviceFilters::default()
            .with_company_name("Acme")
            .with_device_name("LAPTOP")
            .search_body(50, 0);
        assert_eq!(
            attributes(&body)["companyName"],
            json!({ "value": "Acme", "type": "ilike:string" })
        );
        assert_eq!(
            attributes(&body)["name"],
            json!({ "value": "LAPTOP", "type": "ilike:string" })
        );
    }

    #[test]
    fn blank_optional_fields_are_omitted() {
        let body = DeviceFilters::default()
            .with_company_name("  ")
            .with_group_ids("")
            .search_body(50, 0);
        assert!(attributes(&body).get("companyName").is_none());
        assert!(attributes(&body).get("groupIds").is_none());
    }

    #[test]
    fn id_lists_round_trip() {
        let body = DeviceFilters::default()
            .with_company_ids("3, 7,9")
            .search_body(50, 0);
        assert_eq!(
            attributes(&body)["companyIds"],
            json!({ "value": [3, 7, 9], "type": "in:int" })
        );
    }

    #[test]
    fn malformed_id_tokens_pass_through_as_null() {
        assert_eq!(parse_id_list("3,x,9"), vec![json!(3), json!(null), json!(9)]);
    }

    #[test]
    fn security_client_status_multi_select() {
        let body = DeviceFilters::default()
            .with_security_client_status(SecurityClientStatus::Installed)
            .with_security_client_status(SecurityClientStatus::Running)
            .search_body(50, 0);
        assert_eq!(
            attributes(&body)["securityClientStatus"],
            json!({ "value": [3, 5], "type": "in:enum" })
        );
    }

    #[test]
    fn default_sort_is_name_ascending() {
        let body = DeviceFilters::default().search_body(50, 0);
        assert_eq!(body.pointer("/$S/sort"), Some(&json!({ "name": "asc" })));

        let body = DeviceFilters::default()
            .with_sort("added_at", SortDirection::Desc)
            .search_body(50, 0);
        assert_eq!(
            body.pointer("/$S/sort"),
            Some(&json!({ "added_at": "desc" }))
        );
    }

    #[test]
    fn limit_is_clamped_and_offset_kept() {
        let body = DeviceFilters::default().search_body(9999, 200);
        assert_eq!(
            body.pointer("/$S/pagination"),
            Some(&json!({ "limit": 500, "offset": 200 }))
        );
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(50), 50);
    }

    #[test]
    fn list_body_with_and_without_sort() {
        let body = list_body(&["id", "name"], 40, 0, true);
        assert_eq!(
            body,
            json!({
                "$O": { "columns": ["id", "name"] },
                "$S": {
                    "pagination": { "limit": 40, "offset": 0 },
                    "sort": { "name": "asc" },
                }
            })
        );

        let body = list_body(&["alertId"], 40, 0, false);
        assert!(body.pointer("/$S/sort").is_none());
    }
}
