use crate::albums::Album;
use crate::error::AppError;
use crate::ui::Msg;
use crate::ui::model::{Model, initial_model};
use bubbletea_rs::{
    Program, command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel,
    window_size,
};
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::Lazy;
use std::sync::Mutex;

// bubbletea-rs builds the model through an argument-less `init()`, so the
// prepared model is parked here until the program picks it up.
static STARTUP_MODEL: Lazy<Mutex<Option<Model>>> = Lazy::new(|| Mutex::new(None));

fn park_model(slot: &Mutex<Option<Model>>, model: Model) -> Result<(), AppError> {
    let mut parked = slot
        .lock()
        .map_err(|_| AppError::Ui("startup model lock poisoned".to_string()))?;
    *parked = Some(model);
    Ok(())
}

fn take_parked_model(slot: &Mutex<Option<Model>>) -> Option<Model> {
    slot.lock().ok().and_then(|mut parked| parked.take())
}

// Adapter type implementing bubbletea-rs Model trait by delegating to our Model
struct TeaAdapter {
    inner: Model,
}

impl TeaAdapter {
    fn handle_key(&mut self, km: &KeyMsg) -> Option<Cmd> {
        // global quit keys first for reliability across terminals
        match &km.key {
            KeyCode::Char('\u{03}') => return Some(bubbletea_rs::quit()),
            KeyCode::Char('c' | 'C') if km.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(bubbletea_rs::quit());
            }
            KeyCode::Esc | KeyCode::Char('\u{1b}') => {
                if self.inner.input.is_empty() {
                    return Some(bubbletea_rs::quit());
                }
                self.inner.update(Msg::KeyEsc);
                return None;
            }
            _ => {}
        }

        match &km.key {
            KeyCode::Backspace => self.inner.update(Msg::KeyBackspace),
            KeyCode::Up | KeyCode::PageUp => self.inner.update(Msg::KeyUp),
            KeyCode::Down | KeyCode::PageDown => self.inner.update(Msg::KeyDown),
            KeyCode::Char(ch) => {
                if km.modifiers.contains(KeyModifiers::CONTROL) {
                    match ch {
                        'n' | 'N' => self.inner.update(Msg::KeyDown),
                        'p' | 'P' => self.inner.update(Msg::KeyUp),
                        _ => {}
                    }
                } else {
                    self.inner.update(Msg::Rune(*ch));
                }
            }
            _ => { /* ignore other keys */ }
        }

        if self.inner.selected.is_some() {
            return Some(bubbletea_rs::quit());
        }
        None
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        // `run` parks the model before the program starts
        let inner = take_parked_model(&STARTUP_MODEL).unwrap_or_default();
        let mut adapter = TeaAdapter { inner };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        (adapter, Some(window_size()))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(km);
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Runs the interactive picker and returns the id of the chosen album, if any.
pub async fn run(albums: Vec<Album>, show_unbound: bool) -> Result<Option<String>, AppError> {
    let mut model = initial_model(albums);
    model.show_unbound = show_unbound;
    park_model(&STARTUP_MODEL, model)?;

    let program = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()
        .map_err(|e| AppError::Ui(format!("failed to build program: {e:?}")))?;
    let final_adapter = program
        .run()
        .await
        .map_err(|e| AppError::Ui(format!("program error: {e:?}")))?;

    Ok(final_adapter.inner.selected)
}

#[cfg(test)]
mod run_tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn parked_model_is_taken_once() {
        let slot = Mutex::new(None);
        park_model(&slot, initial_model(vec![Album::new("1", "Jazz")])).unwrap();
        let model = take_parked_model(&slot).unwrap();
        assert_eq!(model.items.len(), 1);
        assert!(take_parked_model(&slot).is_none());
    }

    #[test]
    fn poisoned_slot_is_an_error() {
        let slot = Arc::new(Mutex::new(None::<Model>));
        let held = Arc::clone(&slot);
        let _ = std::thread::spawn(move || {
            let _guard = held.lock().unwrap();
            panic!("poison the slot");
        })
        .join();
        let err = park_model(&slot, Model::default()).unwrap_err();
        assert!(matches!(err, AppError::Ui(_)));
    }
}
