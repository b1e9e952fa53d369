//! Domain services built on the REST client.
//!
//! ARCHITECTURE
//! ============
//! Services are stateless and generic over `ApiClient`, so pages build them
//! per call and tests swap in a recording client.

pub mod draws;
