//! API Module
//!
//! HTTP handlers and routing for the user service REST API.
//!
//! # Endpoints
//! - `GET /api/users/:id` - Fetch a user by id
//! - `GET /api/users/allUsers` - List all users
//! - `POST /api/users/createUser` - Create a user
//! - `PUT /api/users/updateUser/:id` - Update a user
//! - `DELETE /api/users/deleteUser/:id` - Delete a user
//! - `GET /api/users/age/:age` - Fetch a user by age
//! - `GET /stats` - Cache and store statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
