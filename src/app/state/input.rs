use super::*;

impl AppState {
    pub(crate) async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_ctrl_c(key) {
                    tx.send(AppEvent::Quit).await?;
                } else if self.search.open {
                    self.handle_search_key(key, tx);
                } else {
                    self.handle_command_key(key, tx, cli).await?;
                }
            }
            Event::Resize(cols, rows) => {
                let (width, height) = CellSurface::pixel_size(cols, rows);
                self.animation.on_surface_resized(width, height);
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_command_key(
        &mut self,
        key: KeyEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => tx.send(AppEvent::Quit).await?,
            KeyCode::Char('/') => self.search.open(),
            KeyCode::Char('u') => self.toggle_units(tx),
            KeyCode::Char('r') if self.mode != AppMode::Loading => {
                self.start_fetch(tx, cli).await?;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_search_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) {
        let due = match key.code {
            KeyCode::Esc => {
                self.search.close();
                None
            }
            KeyCode::Enter => {
                if let Some(location) = self.search.selected_location().cloned() {
                    self.search.close();
                    self.switch_to_location(tx, location);
                }
                None
            }
            KeyCode::Up => {
                self.search.move_selection(-1);
                None
            }
            KeyCode::Down => {
                self.search.move_selection(1);
                None
            }
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Char(ch) if is_city_char(ch) => self.search.push_char(ch),
            _ => None,
        };
        if let Some(generation) = due {
            schedule_search(tx.clone(), generation, SEARCH_DEBOUNCE);
        }
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}
