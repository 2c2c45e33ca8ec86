// Request descriptors
//
// Every client operation is described by an immutable `Request` before any
// I/O happens: HTTP method, fully composed URL, and form parameters for the
// create calls. Builders never touch the network; transports consume the
// descriptors as-is.

use reqwest::Method;
use url::Url;

use crate::error::Error;
use crate::model::Action;

/// An immutable description of one HTTP exchange.
///
/// Built from a normalized base URL (trailing slash guaranteed by the
/// client), so joins compose `{base}/{resource}` and `{base}/{resource}/{id}`
/// without clobbering the base path.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    form: Vec<(&'static str, String)>,
}

impl Request {
    fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            form: Vec::new(),
        }
    }

    fn post(url: Url, form: Vec<(&'static str, String)>) -> Self {
        Self {
            method: Method::POST,
            url,
            form,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Form parameters, urlencoded into the body when non-empty.
    pub fn form(&self) -> &[(&'static str, String)] {
        &self.form
    }

    // ── Capability ──────────────────────────────────────────────────

    /// `GET {base}`, the server descriptor (driver, version).
    pub fn api(base: &Url) -> Self {
        Self::get(base.clone())
    }

    // ── Instances ───────────────────────────────────────────────────

    /// `GET {base}/instances`
    pub fn instances(base: &Url) -> Result<Self, Error> {
        Ok(Self::get(base.join("instances")?))
    }

    /// `GET {base}/instances/{id}`
    pub fn instance(base: &Url, instance_id: &str) -> Result<Self, Error> {
        Ok(Self::get(base.join(&format!("instances/{instance_id}"))?))
    }

    /// `POST {base}/instances` with the launch parameters as form fields.
    ///
    /// Unset optional parameters are omitted entirely; the server falls back
    /// to its own defaults for anything not sent.
    pub fn create_instance(base: &Url, params: &CreateInstanceParams) -> Result<Self, Error> {
        let mut form = vec![("image_id", params.image_id.clone())];
        if let Some(name) = &params.name {
            form.push(("name", name.clone()));
        }
        if let Some(realm_id) = &params.realm_id {
            form.push(("realm_id", realm_id.clone()));
        }
        if let Some(profile_id) = &params.profile_id {
            form.push(("hwp_id", profile_id.clone()));
        }
        if let Some(key_id) = &params.key_id {
            form.push(("keyname", key_id.clone()));
        }
        if let Some(memory) = &params.memory {
            form.push(("hwp_memory", memory.clone()));
        }
        if let Some(storage) = &params.storage {
            form.push(("hwp_storage", storage.clone()));
        }
        Ok(Self::post(base.join("instances")?, form))
    }

    // ── Images ──────────────────────────────────────────────────────

    /// `GET {base}/images`
    pub fn images(base: &Url) -> Result<Self, Error> {
        Ok(Self::get(base.join("images")?))
    }

    /// `GET {base}/images/{id}`
    pub fn image(base: &Url, image_id: &str) -> Result<Self, Error> {
        Ok(Self::get(base.join(&format!("images/{image_id}"))?))
    }

    // ── Realms ──────────────────────────────────────────────────────

    /// `GET {base}/realms`
    pub fn realms(base: &Url) -> Result<Self, Error> {
        Ok(Self::get(base.join("realms")?))
    }

    /// `GET {base}/realms/{id}`
    pub fn realm(base: &Url, realm_id: &str) -> Result<Self, Error> {
        Ok(Self::get(base.join(&format!("realms/{realm_id}"))?))
    }

    // ── Hardware profiles ───────────────────────────────────────────

    /// `GET {base}/hardware_profiles`
    pub fn hardware_profiles(base: &Url) -> Result<Self, Error> {
        Ok(Self::get(base.join("hardware_profiles")?))
    }

    /// `GET {base}/hardware_profiles/{id}`
    pub fn hardware_profile(base: &Url, profile_id: &str) -> Result<Self, Error> {
        Ok(Self::get(base.join(&format!("hardware_profiles/{profile_id}"))?))
    }

    // ── Keys ────────────────────────────────────────────────────────

    /// `GET {base}/keys`
    pub fn keys(base: &Url) -> Result<Self, Error> {
        Ok(Self::get(base.join("keys")?))
    }

    /// `GET {base}/keys/{id}`
    pub fn key(base: &Url, key_id: &str) -> Result<Self, Error> {
        Ok(Self::get(base.join(&format!("keys/{key_id}"))?))
    }

    /// `POST {base}/keys` with the requested key name.
    pub fn create_key(base: &Url, name: &str) -> Result<Self, Error> {
        Ok(Self::post(base.join("keys")?, vec![("keyname", name.to_owned())]))
    }

    // ── Actions ─────────────────────────────────────────────────────

    /// Request for a server-advertised action link.
    ///
    /// The action's `href` must be absolute (servers always emit absolute
    /// links); an absent or relative URL is rejected. An absent method means
    /// GET, per the link-element convention.
    pub fn action(action: &Action) -> Result<Self, Error> {
        let url = Url::parse(action.url.as_deref().unwrap_or_default())?;
        let method = match &action.method {
            Some(m) => {
                Method::from_bytes(m.to_ascii_uppercase().as_bytes()).map_err(|_| {
                    Error::Configuration {
                        url: url.to_string(),
                        reason: format!("invalid HTTP method \"{m}\""),
                    }
                })?
            }
            None => Method::GET,
        };
        Ok(Self {
            method,
            url,
            form: Vec::new(),
        })
    }
}

/// Parameters for [`DeltacloudClient::create_instance_with`](crate::DeltacloudClient::create_instance_with).
///
/// Only the image id is required. Everything else rides along when set,
/// using the server's form-field names (`hwp_id`, `keyname`, ...).
#[derive(Debug, Clone, Default)]
pub struct CreateInstanceParams {
    /// Image to launch from (required).
    pub image_id: String,
    pub name: Option<String>,
    pub realm_id: Option<String>,
    pub profile_id: Option<String>,
    /// Key to authorize on the new instance.
    pub key_id: Option<String>,
    /// Memory override within the profile's range, in the profile's unit.
    pub memory: Option<String>,
    /// Storage override within the profile's range, in the profile's unit.
    pub storage: Option<String>,
}

impl CreateInstanceParams {
    pub fn new(image_id: impl Into<String>) -> Self {
        Self {
            image_id: image_id.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:3001/api/").unwrap()
    }

    #[test]
    fn resource_urls_extend_the_base_path() {
        let base = base();
        assert_eq!(
            Request::realms(&base).unwrap().url().as_str(),
            "http://localhost:3001/api/realms"
        );
        assert_eq!(
            Request::realm(&base, "42").unwrap().url().as_str(),
            "http://localhost:3001/api/realms/42"
        );
        assert_eq!(
            Request::instance(&base, "inst1").unwrap().url().as_str(),
            "http://localhost:3001/api/instances/inst1"
        );
        assert_eq!(
            Request::hardware_profile(&base, "m1-small")
                .unwrap()
                .url()
                .as_str(),
            "http://localhost:3001/api/hardware_profiles/m1-small"
        );
    }

    #[test]
    fn api_request_targets_the_base_itself() {
        let request = Request::api(&base());
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().as_str(), "http://localhost:3001/api/");
        assert!(request.form().is_empty());
    }

    #[test]
    fn create_instance_sends_only_set_parameters() {
        let minimal = CreateInstanceParams::new("img1");
        let request = Request::create_instance(&base(), &minimal).unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.form().to_vec(), vec![("image_id", "img1".to_owned())]);

        let full = CreateInstanceParams {
            name: Some("web1".into()),
            realm_id: Some("us".into()),
            profile_id: Some("m1-small".into()),
            key_id: Some("deploy-key".into()),
            memory: Some("512".into()),
            storage: Some("1".into()),
            ..CreateInstanceParams::new("img1")
        };
        let request = Request::create_instance(&base(), &full).unwrap();
        let form = request.form();
        assert!(form.contains(&("image_id", "img1".to_owned())));
        assert!(form.contains(&("name", "web1".to_owned())));
        assert!(form.contains(&("realm_id", "us".to_owned())));
        assert!(form.contains(&("hwp_id", "m1-small".to_owned())));
        assert!(form.contains(&("keyname", "deploy-key".to_owned())));
        assert!(form.contains(&("hwp_memory", "512".to_owned())));
        assert!(form.contains(&("hwp_storage", "1".to_owned())));
    }

    #[test]
    fn create_key_posts_the_keyname() {
        let request = Request::create_key(&base(), "deploy-key").unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:3001/api/keys");
        assert_eq!(
            request.form().to_vec(),
            vec![("keyname", "deploy-key".to_owned())]
        );
    }

    #[test]
    fn action_requests_honor_the_advertised_method() {
        let stop = Action {
            name: Some("stop".into()),
            url: Some("http://localhost:3001/api/instances/inst1/stop".into()),
            method: Some("post".into()),
        };
        let request = Request::action(&stop).unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:3001/api/instances/inst1/stop"
        );

        let bare = Action {
            name: Some("self".into()),
            url: Some("http://localhost:3001/api/instances/inst1".into()),
            method: None,
        };
        assert_eq!(Request::action(&bare).unwrap().method(), &Method::GET);
    }

    #[test]
    fn action_without_url_is_rejected() {
        let broken = Action {
            name: Some("stop".into()),
            url: None,
            method: Some("post".into()),
        };
        assert!(matches!(
            Request::action(&broken),
            Err(Error::InvalidUrl(_))
        ));
    }
}
