use gateplane_domain::{
    ApiProduct, ApiProductStatus, Credential, Developer, DeveloperApp, Key, OAuthToken, Role,
    RoleAllow, User,
};

const TS: i64 = 1_700_000_000_000;

pub fn user(name: &str, status: &str) -> User {
    User {
        name: name.to_string(),
        display_name: format!("User {name}"),
        password: "argon2id$fixture".to_string(),
        status: status.to_string(),
        roles: vec!["viewer".to_string()],
        created_at: TS,
        created_by: "fixtures".to_string(),
        lastmodified_at: TS,
        lastmodified_by: "fixtures".to_string(),
    }
}

pub fn role(name: &str) -> Role {
    Role {
        name: name.to_string(),
        display_name: format!("Role {name}"),
        allows: vec![RoleAllow {
            methods: vec!["GET".to_string(), "POST".to_string()],
            paths: vec!["/v1/developers".to_string()],
        }],
        created_at: TS,
        created_by: "fixtures".to_string(),
        lastmodified_at: TS,
        lastmodified_by: "fixtures".to_string(),
    }
}

pub fn developer(developer_id: &str, email: &str) -> Developer {
    Developer {
        developer_id: developer_id.to_string(),
        email: email.to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        apps: vec![],
        attributes: vec![],
        status: "active".to_string(),
        organization_name: "acme".to_string(),
        created_at: TS,
        created_by: "fixtures".to_string(),
        lastmodified_at: TS,
        lastmodified_by: "fixtures".to_string(),
    }
}

pub fn developer_app(app_id: &str, name: &str, developer_id: &str) -> DeveloperApp {
    DeveloperApp {
        app_id: app_id.to_string(),
        name: name.to_string(),
        display_name: format!("App {name}"),
        developer_id: developer_id.to_string(),
        callback_url: "https://example.test/cb".to_string(),
        attributes: vec![],
        status: "active".to_string(),
        organization_name: "acme".to_string(),
        created_at: TS,
        created_by: "fixtures".to_string(),
        lastmodified_at: TS,
        lastmodified_by: "fixtures".to_string(),
    }
}

pub fn api_product(name: &str) -> ApiProduct {
    ApiProduct {
        name: name.to_string(),
        display_name: format!("Product {name}"),
        description: String::new(),
        api_resources: vec!["/forecast/*".to_string()],
        approval_type: "auto".to_string(),
        scopes: vec![],
        attributes: vec![],
        organization_name: "acme".to_string(),
        created_at: TS,
        created_by: "fixtures".to_string(),
        lastmodified_at: TS,
        lastmodified_by: "fixtures".to_string(),
    }
}

pub fn credential(consumer_key: &str, app_id: &str, product: &str) -> Credential {
    Credential {
        consumer_key: consumer_key.to_string(),
        consumer_secret: "cs".to_string(),
        api_products: vec![ApiProductStatus {
            api_product: product.to_string(),
            status: "approved".to_string(),
        }],
        app_id: app_id.to_string(),
        expires_at: -1,
        issued_at: TS,
        status: "approved".to_string(),
    }
}

pub fn key(consumer_key: &str, app_id: &str, product: &str) -> Key {
    Key {
        consumer_key: consumer_key.to_string(),
        consumer_secret: "ks".to_string(),
        api_products: vec![ApiProductStatus {
            api_product: product.to_string(),
            status: "approved".to_string(),
        }],
        app_id: app_id.to_string(),
        attributes: vec![],
        expires_at: -1,
        issued_at: TS,
        status: "approved".to_string(),
    }
}

pub fn oauth_token(access: &str, code: &str, refresh: &str) -> OAuthToken {
    OAuthToken {
        client_id: "client-1".to_string(),
        user_id: "user-1".to_string(),
        redirect_uri: "https://example.test/cb".to_string(),
        scope: "read write".to_string(),
        code: code.to_string(),
        code_created_at: TS,
        code_expires_in: 600,
        access: access.to_string(),
        access_created_at: TS,
        access_expires_in: 3600,
        refresh: refresh.to_string(),
        refresh_created_at: TS,
        refresh_expires_in: 86_400,
    }
}
