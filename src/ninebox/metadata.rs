//! Static descriptive metadata for the nine grid cells.
//!
//! Fixed reference data, defined once and addressed by cell; the wording
//! feeds the narrative sections of generated reports and the drill-down
//! panels of the grid UI. Icon names are identifiers resolved by the
//! consuming front-end, not glyphs.

use serde::Serialize;

use super::NineBoxPosition;

/// Talent-importance tier of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TalentTier {
    /// Bottom of the grid; value at risk.
    Bajo,
    /// Solid contributors.
    Medio,
    /// High performers or high potentials.
    Alto,
    /// The organization's key talent.
    Critico,
}

/// Retention-priority tier of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RetentionPriority {
    /// Retention effort not warranted by itself.
    Baja,
    /// Keep engaged through normal management.
    Media,
    /// Losing this member hurts; act proactively.
    Alta,
    /// Flight would be a serious loss; act now.
    Urgente,
}

/// Priority of a recommended action. Actions are listed urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    /// Schedule within the quarter.
    Media,
    /// Schedule within the month.
    Alta,
    /// Act immediately.
    Urgente,
}

/// A concrete action suggested to the manager, with its priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendedAction {
    /// What to do.
    pub action: &'static str,
    /// How soon.
    pub priority: ActionPriority,
}

/// Descriptive record for one grid cell.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CellMetadata {
    /// Short display name (e.g. "Estrella").
    pub label: &'static str,
    /// Icon identifier consumed by front-ends (e.g. "star").
    pub icon: &'static str,
    /// Talent-importance tier.
    pub talent_tier: TalentTier,
    /// Retention-priority tier.
    pub retention_priority: RetentionPriority,
    /// Development areas to focus coaching on.
    pub development_focus: &'static [&'static str],
    /// Actions ordered urgent > alta > media.
    pub actions: &'static [RecommendedAction],
    /// Guidance text for the member's manager.
    pub guidance: &'static str,
}

/// Resolve the static record for a cell. Total over the nine keys.
pub(super) fn for_position(position: NineBoxPosition) -> &'static CellMetadata {
    match position {
        NineBoxPosition::AltoAlto => &ESTRELLA,
        NineBoxPosition::AltoMedio => &ALTO_DESEMPENO,
        NineBoxPosition::AltoBajo => &ESPECIALISTA,
        NineBoxPosition::MedioAlto => &FUTURA_ESTRELLA,
        NineBoxPosition::MedioMedio => &JUGADOR_CLAVE,
        NineBoxPosition::MedioBajo => &PROFESIONAL_CONFIABLE,
        NineBoxPosition::BajoAlto => &ENIGMA,
        NineBoxPosition::BajoMedio => &DILEMA,
        NineBoxPosition::BajoBajo => &RIESGO,
    }
}

static ESTRELLA: CellMetadata = CellMetadata {
    label: "Estrella",
    icon: "star",
    talent_tier: TalentTier::Critico,
    retention_priority: RetentionPriority::Urgente,
    development_focus: &[
        "Liderazgo estratégico",
        "Visibilidad ejecutiva",
        "Proyectos transversales",
    ],
    actions: &[
        RecommendedAction {
            action: "Definir plan de sucesión y retención individualizado",
            priority: ActionPriority::Urgente,
        },
        RecommendedAction {
            action: "Asignar proyectos de alta visibilidad con patrocinio ejecutivo",
            priority: ActionPriority::Alta,
        },
        RecommendedAction {
            action: "Incorporar a programas de mentoría como mentor",
            priority: ActionPriority::Media,
        },
    ],
    guidance: "Talento clave de la organización: combina resultados sobresalientes \
               con capacidad de crecer a roles mayores. El riesgo principal es la \
               fuga; la conversación de carrera no puede esperar al ciclo anual.",
};

static ALTO_DESEMPENO: CellMetadata = CellMetadata {
    label: "Alto desempeño",
    icon: "award",
    talent_tier: TalentTier::Alto,
    retention_priority: RetentionPriority::Alta,
    development_focus: &[
        "Ampliar alcance del rol actual",
        "Habilidades de liderazgo de personas",
    ],
    actions: &[
        RecommendedAction {
            action: "Reconocer resultados de forma explícita y pública",
            priority: ActionPriority::Alta,
        },
        RecommendedAction {
            action: "Explorar interés en rutas de liderazgo",
            priority: ActionPriority::Media,
        },
    ],
    guidance: "Entrega resultados excelentes con margen de crecimiento moderado. \
               Mantener el reto del rol alto; la monotonía erosiona el compromiso \
               de este perfil antes que el de ningún otro.",
};

static ESPECIALISTA: CellMetadata = CellMetadata {
    label: "Especialista",
    icon: "wrench",
    talent_tier: TalentTier::Alto,
    retention_priority: RetentionPriority::Alta,
    development_focus: &[
        "Profundidad técnica",
        "Transferencia de conocimiento al equipo",
    ],
    actions: &[
        RecommendedAction {
            action: "Formalizar rol de referente técnico",
            priority: ActionPriority::Alta,
        },
        RecommendedAction {
            action: "Documentar y transferir conocimiento crítico",
            priority: ActionPriority::Alta,
        },
        RecommendedAction {
            action: "Valorar carrera técnica sin gestión de personas",
            priority: ActionPriority::Media,
        },
    ],
    guidance: "Experto que sostiene resultados sobresalientes en su dominio con \
               poca proyección hacia otros roles. No forzar una ruta de gestión: \
               el valor está en la profundidad, no en el ascenso.",
};

static FUTURA_ESTRELLA: CellMetadata = CellMetadata {
    label: "Futura estrella",
    icon: "rocket",
    talent_tier: TalentTier::Alto,
    retention_priority: RetentionPriority::Alta,
    development_focus: &[
        "Consistencia en la ejecución",
        "Exposición a retos mayores",
        "Feedback frecuente",
    ],
    actions: &[
        RecommendedAction {
            action: "Asignar un reto exigente con acompañamiento cercano",
            priority: ActionPriority::Alta,
        },
        RecommendedAction {
            action: "Plan de desarrollo con hitos trimestrales",
            priority: ActionPriority::Alta,
        },
        RecommendedAction {
            action: "Revisar barreras que limitan el desempeño actual",
            priority: ActionPriority::Media,
        },
    ],
    guidance: "Alto potencial con desempeño aún en construcción. Invertir ahora: \
               con el reto y el acompañamiento adecuados, es la cantera de las \
               futuras posiciones clave.",
};

static JUGADOR_CLAVE: CellMetadata = CellMetadata {
    label: "Jugador clave",
    icon: "users",
    talent_tier: TalentTier::Medio,
    retention_priority: RetentionPriority::Media,
    development_focus: &[
        "Fortalezas específicas del rol",
        "Participación en iniciativas de mejora",
    ],
    actions: &[
        RecommendedAction {
            action: "Mantener objetivos claros y alcanzables",
            priority: ActionPriority::Media,
        },
        RecommendedAction {
            action: "Ofrecer formación en áreas de interés del colaborador",
            priority: ActionPriority::Media,
        },
    ],
    guidance: "El núcleo del equipo: desempeño y potencial sólidos y estables. \
               No necesita intervención especial, pero sí reconocimiento; este \
               grupo sostiene la operación diaria.",
};

static PROFESIONAL_CONFIABLE: CellMetadata = CellMetadata {
    label: "Profesional confiable",
    icon: "shield",
    talent_tier: TalentTier::Medio,
    retention_priority: RetentionPriority::Media,
    development_focus: &[
        "Dominio del rol actual",
        "Motivación y compromiso",
    ],
    actions: &[
        RecommendedAction {
            action: "Confirmar ajuste persona-puesto en la conversación de desarrollo",
            priority: ActionPriority::Media,
        },
        RecommendedAction {
            action: "Reconocer la fiabilidad sostenida",
            priority: ActionPriority::Media,
        },
    ],
    guidance: "Cumple con consistencia en un rol que domina, con proyección \
               limitada. Valorar la estabilidad que aporta en lugar de empujar \
               promociones que no busca.",
};

static ENIGMA: CellMetadata = CellMetadata {
    label: "Enigma",
    icon: "help-circle",
    talent_tier: TalentTier::Alto,
    retention_priority: RetentionPriority::Alta,
    development_focus: &[
        "Diagnóstico de barreras de desempeño",
        "Ajuste de rol o de contexto",
        "Acuerdos de mejora a corto plazo",
    ],
    actions: &[
        RecommendedAction {
            action: "Conversación de diagnóstico: por qué el potencial no se traduce en resultados",
            priority: ActionPriority::Urgente,
        },
        RecommendedAction {
            action: "Acordar plan de mejora con plazos definidos",
            priority: ActionPriority::Alta,
        },
        RecommendedAction {
            action: "Evaluar cambio de rol o de equipo",
            priority: ActionPriority::Media,
        },
    ],
    guidance: "Alto potencial que no está rindiendo: la combinación más cara de \
               ignorar. Casi siempre hay una causa concreta (rol equivocado, \
               contexto, motivación); encontrarla es tarea del manager, no del \
               colaborador.",
};

static DILEMA: CellMetadata = CellMetadata {
    label: "Dilema",
    icon: "alert-circle",
    talent_tier: TalentTier::Medio,
    retention_priority: RetentionPriority::Baja,
    development_focus: &[
        "Desempeño en las responsabilidades básicas del rol",
        "Claridad de expectativas",
    ],
    actions: &[
        RecommendedAction {
            action: "Fijar expectativas de desempeño explícitas y medibles",
            priority: ActionPriority::Alta,
        },
        RecommendedAction {
            action: "Seguimiento quincenal del plan de mejora",
            priority: ActionPriority::Media,
        },
    ],
    guidance: "Desempeño bajo con algo de margen de crecimiento. Antes de invertir \
               en desarrollo, asegurar que las expectativas del rol están claras y \
               el seguimiento es cercano.",
};

static RIESGO: CellMetadata = CellMetadata {
    label: "Riesgo",
    icon: "alert-triangle",
    talent_tier: TalentTier::Bajo,
    retention_priority: RetentionPriority::Baja,
    development_focus: &[
        "Plan de mejora formal",
        "Reubicación o salida ordenada",
    ],
    actions: &[
        RecommendedAction {
            action: "Iniciar plan de mejora formal con criterios de salida",
            priority: ActionPriority::Urgente,
        },
        RecommendedAction {
            action: "Documentar desempeño y acuerdos por escrito",
            priority: ActionPriority::Alta,
        },
        RecommendedAction {
            action: "Evaluar reubicación interna antes de la desvinculación",
            priority: ActionPriority::Media,
        },
    ],
    guidance: "Bajo desempeño y bajo potencial sostenidos. Postergar la decisión \
               daña al equipo más que al evaluado; el plan de mejora debe tener \
               fecha de revisión y consecuencias definidas.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_has_metadata() {
        for position in NineBoxPosition::ALL {
            let meta = position.metadata();
            assert!(!meta.label.is_empty());
            assert!(!meta.icon.is_empty());
            assert!(!meta.development_focus.is_empty());
            assert!(!meta.actions.is_empty());
            assert!(!meta.guidance.is_empty());
        }
    }

    #[test]
    fn test_actions_ordered_by_descending_priority() {
        for position in NineBoxPosition::ALL {
            let actions = position.metadata().actions;
            for pair in actions.windows(2) {
                assert!(
                    pair[0].priority >= pair[1].priority,
                    "{}: actions out of priority order",
                    position.key()
                );
            }
        }
    }

    #[test]
    fn test_corner_cells() {
        let estrella = NineBoxPosition::AltoAlto.metadata();
        assert_eq!(estrella.label, "Estrella");
        assert_eq!(estrella.talent_tier, TalentTier::Critico);
        assert_eq!(estrella.retention_priority, RetentionPriority::Urgente);

        let riesgo = NineBoxPosition::BajoBajo.metadata();
        assert_eq!(riesgo.label, "Riesgo");
        assert_eq!(riesgo.talent_tier, TalentTier::Bajo);

        // Low performance, high potential: the Enigma cell
        let enigma = NineBoxPosition::BajoAlto.metadata();
        assert_eq!(enigma.label, "Enigma");
    }
}
