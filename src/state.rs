use crate::models::HabitData;
use crate::remote::HttpRemote;
use crate::session::ViewSession;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<HabitData>>,
    pub view: Arc<Mutex<ViewSession<HttpRemote>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: HabitData, view: ViewSession<HttpRemote>) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            view: Arc::new(Mutex::new(view)),
        }
    }
}
