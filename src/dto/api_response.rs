use serde::Serialize;

// Generic JSON envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

// Insert result
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: i64,
}

// Delete result
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: u64,
}
