use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::{json, Value};

/// OpenAPI description of the served routes. The `servers` entry points
/// at the host the document was requested from.
pub fn openapi_document(server_url: &str) -> Value {
    let user_id_param = json!([{
        "in": "path",
        "name": "id",
        "required": true,
        "schema": { "type": "integer" },
        "description": "The ID of the user"
    }]);
    let user_ref = json!({ "$ref": "#/components/schemas/User" });
    let user_fields = json!({
        "name": { "type": "string", "example": "New User" },
        "email": { "type": "string", "example": "newuser@example.com" }
    });
    let not_found = json!({
        "description": "User not found",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Error" } } }
    });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Node.js Study API",
            "version": "1.0.0",
            "description": "A simple API for managing users"
        },
        "servers": [{ "url": server_url, "description": "Development server" }],
        "paths": {
            "/": {
                "get": {
                    "summary": "Server health check",
                    "description": "Returns a message to confirm the server is running",
                    "responses": {
                        "200": {
                            "description": "Server is running successfully",
                            "content": { "application/json": { "schema": {
                                "type": "object",
                                "properties": { "message": {
                                    "type": "string",
                                    "example": "Node.js Study Server is running!"
                                } }
                            } } }
                        }
                    }
                }
            },
            "/users": {
                "get": {
                    "summary": "Get all users",
                    "description": "Returns a list of all users",
                    "responses": {
                        "200": {
                            "description": "A list of users",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": user_ref
                            } } }
                        }
                    }
                },
                "post": {
                    "summary": "Create a new user",
                    "description": "Creates a new user with the provided name and email",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": {
                            "type": "object",
                            "required": ["name", "email"],
                            "properties": user_fields
                        } } }
                    },
                    "responses": {
                        "201": {
                            "description": "User created successfully",
                            "content": { "application/json": { "schema": user_ref } }
                        },
                        "400": { "description": "Name and email are required" }
                    }
                }
            },
            "/users/{id}": {
                "get": {
                    "summary": "Get a user by ID",
                    "description": "Returns a single user by their ID",
                    "parameters": user_id_param,
                    "responses": {
                        "200": {
                            "description": "A single user",
                            "content": { "application/json": { "schema": user_ref } }
                        },
                        "404": not_found
                    }
                },
                "put": {
                    "summary": "Update a user",
                    "description": "Updates an existing user's information",
                    "parameters": user_id_param,
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": {
                            "type": "object",
                            "properties": user_fields
                        } } }
                    },
                    "responses": {
                        "200": {
                            "description": "User updated successfully",
                            "content": { "application/json": { "schema": user_ref } }
                        },
                        "404": not_found
                    }
                },
                "delete": {
                    "summary": "Delete a user",
                    "description": "Deletes a user by their ID",
                    "parameters": user_id_param,
                    "responses": {
                        "200": {
                            "description": "User deleted successfully",
                            "content": { "application/json": { "schema": {
                                "type": "object",
                                "properties": {
                                    "message": {
                                        "type": "string",
                                        "example": "User deleted successfully"
                                    },
                                    "user": user_ref
                                }
                            } } }
                        },
                        "404": not_found
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "User": {
                    "type": "object",
                    "required": ["id", "name", "email"],
                    "properties": {
                        "id": {
                            "type": "integer",
                            "description": "The auto-generated id of the user",
                            "example": 1
                        },
                        "name": {
                            "type": "string",
                            "description": "The name of the user",
                            "example": "John Doe"
                        },
                        "email": {
                            "type": "string",
                            "description": "The email of the user",
                            "example": "john@example.com"
                        },
                        "createdAt": {
                            "type": "string",
                            "format": "date-time",
                            "description": "When the user was created. Only set by the database store"
                        },
                        "updatedAt": {
                            "type": "string",
                            "format": "date-time",
                            "description": "When the user was last updated. Only set by the database store"
                        }
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["message"],
                    "properties": { "message": { "type": "string" } }
                }
            }
        }
    })
}

async fn docs_controller(http_req: HttpRequest) -> HttpResponse {
    let conn = http_req.connection_info();
    let server_url = format!("{}://{}", conn.scheme(), conn.host());
    HttpResponse::Ok().json(openapi_document(&server_url))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/docs", web::get().to(docs_controller));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn documents_every_user_operation() {
        let doc = openapi_document("http://localhost:3000");
        assert_eq!(doc["servers"][0]["url"], "http://localhost:3000");
        for method in &["get", "post"] {
            assert!(doc["paths"]["/users"][method].is_object());
        }
        for method in &["get", "put", "delete"] {
            assert!(doc["paths"]["/users/{id}"][method]["responses"]["404"].is_object());
        }
        assert_eq!(
            doc["components"]["schemas"]["User"]["required"],
            json!(["id", "name", "email"])
        );
    }
}
