//! Merge - Aggiornamento parziale delle entità
//!
//! Un patch contiene solo i campi da modificare: ogni campo `Some(_)` sovrascrive
//! il valore esistente, ogni campo `None` lo lascia invariato.

/// Applica un patch parziale su un'entità già persistita
pub trait Merge<Patch> {
    fn merge(&mut self, patch: Patch);
}

/// Sovrascrive `slot` solo se il valore in ingresso è presente
pub(crate) fn overwrite<T>(slot: &mut Option<T>, incoming: Option<T>) {
    if incoming.is_some() {
        *slot = incoming;
    }
}
