//! Content shipped with the game (Spanish locale).

use crate::achievements::{Achievement, AchievementDef};
use crate::levels::{Difficulty, Level, LevelId, UserStory};
use crate::patterns::{InvestCriterion, PatternColor, SlicingPattern};

pub(crate) fn patterns() -> Vec<SlicingPattern> {
    vec![
        SlicingPattern::new(
            "workflow",
            "Proceso o Workflow",
            "Divide historias que tienen múltiples pasos secuenciales. Comienza con el primer y último paso, luego agrega los intermedios.",
            "Workflow",
            PatternColor::Blue,
        )
        .with_tip("Identifica el primer paso que aporta valor")
        .with_tip("Identifica el último paso esencial")
        .with_tip("Los pasos intermedios pueden agregarse después"),
        SlicingPattern::new(
            "crud",
            "Operaciones CRUD",
            "Cuando una historia incluye Crear, Leer, Actualizar y Eliminar, comienza con lo estrictamente necesario.",
            "Database",
            PatternColor::Green,
        )
        .with_tip("Comienza con la operación más utilizada")
        .with_tip("Las operaciones menos usadas pueden ser manuales inicialmente")
        .with_tip("Prioriza por valor de negocio"),
        SlicingPattern::new(
            "business-rules",
            "Reglas de Negocio",
            "Si las reglas de negocio son complejas, crea una historia para cada regla y prioriza por valor.",
            "Scale",
            PatternColor::Purple,
        )
        .with_tip("Una regla de negocio por historia")
        .with_tip("Prioriza las reglas más críticas")
        .with_tip("Las excepciones pueden venir después"),
        SlicingPattern::new(
            "happy-path",
            "Happy Path vs Edge Cases",
            "Divide en el camino feliz primero, luego agrega historias para validaciones y excepciones.",
            "Smile",
            PatternColor::Yellow,
        )
        .with_tip("El happy path primero")
        .with_tip("Casos de error después")
        .with_tip("Validaciones como historias separadas"),
        SlicingPattern::new(
            "data-variations",
            "División por Datos",
            "Divide según el tipo o variación de datos, comenzando con los más importantes.",
            "Layers",
            PatternColor::Orange,
        )
        .with_tip("Comienza con los datos más críticos")
        .with_tip("Expande a otros tipos gradualmente")
        .with_tip("Un tipo de dato por historia"),
        SlicingPattern::new(
            "interfaces",
            "Una Interfaz por Vez",
            "Si requiere múltiples interfaces o plataformas, trabaja con una a la vez.",
            "Monitor",
            PatternColor::Pink,
        )
        .with_tip("Una plataforma por historia")
        .with_tip("Prioriza la más utilizada")
        .with_tip("Mantén la funcionalidad consistente"),
        SlicingPattern::new(
            "users",
            "Un Usuario por Vez",
            "Si una historia incluye funcionalidad para diversos usuarios, divide por rol o persona.",
            "Users",
            PatternColor::Blue,
        )
        .with_tip("Una persona/rol por historia")
        .with_tip("Comienza con el usuario principal")
        .with_tip("Los roles secundarios pueden esperar"),
        SlicingPattern::new(
            "spike",
            "Spike de Aprendizaje",
            "Cuando falta conocimiento técnico, comienza con una fase exploratoria con objetivo y tiempo fijo.",
            "Lightbulb",
            PatternColor::Yellow,
        )
        .with_tip("Define un objetivo de aprendizaje claro")
        .with_tip("Establece un tiempo límite")
        .with_tip("El entregable puede ser conocimiento documentado"),
    ]
}

pub(crate) fn invest_criteria() -> Vec<InvestCriterion> {
    vec![
        InvestCriterion::new(
            'I',
            "Independent",
            "La historia puede desarrollarse independientemente de otras",
        ),
        InvestCriterion::new('N', "Negotiable", "Los detalles pueden negociarse con el equipo"),
        InvestCriterion::new('V', "Valuable", "Aporta valor al usuario o negocio"),
        InvestCriterion::new('E', "Estimable", "El equipo puede estimar el esfuerzo"),
        InvestCriterion::new(
            'S',
            "Small",
            "Es lo suficientemente pequeña para completar en un sprint",
        ),
        InvestCriterion::new('T', "Testable", "Se puede verificar que funciona correctamente"),
    ]
}

pub(crate) fn achievements() -> Vec<AchievementDef> {
    vec![
        AchievementDef::new(
            Achievement::FirstSlice,
            "Primera Rebanada",
            "Completa tu primer nivel",
            "🎯",
        ),
        AchievementDef::new(
            Achievement::CrudMaster,
            "Maestro CRUD",
            "Completa todos los niveles CRUD",
            "📊",
        ),
        AchievementDef::new(
            Achievement::WorkflowWizard,
            "Mago del Workflow",
            "Domina los patrones de workflow",
            "🔮",
        ),
        AchievementDef::new(
            Achievement::PerfectScore,
            "Puntuación Perfecta",
            "Obtén 3 estrellas en un nivel",
            "⭐",
        ),
        AchievementDef::new(
            Achievement::NoHints,
            "Sin Ayuda",
            "Completa un nivel sin usar pistas",
            "🧠",
        ),
        AchievementDef::new(
            Achievement::SpeedDemon,
            "Demonio de la Velocidad",
            "Completa un nivel en menos de 2 minutos",
            "⚡",
        ),
        AchievementDef::new(
            Achievement::SpidrSupreme,
            "SPIDR Supremo",
            "Completa el nivel avanzado combinado",
            "🕷️",
        ),
    ]
}

/// Expected stories all read "Como <role> quiero <action> <benefit>".
fn story(id: &str, role: &str, action: &str, benefit: &str) -> UserStory {
    UserStory::new(id, format!("Como {role} quiero {action} {benefit}"), role, action, benefit)
}

fn epic(id: &str, role: &str, action: &str, benefit: &str) -> UserStory {
    UserStory::new(id, format!("Como {role} quiero {action}"), role, action, benefit)
}

fn hints(items: &[&str]) -> Vec<String> {
    items.iter().map(|h| h.to_string()).collect()
}

pub(crate) fn levels() -> Vec<Level> {
    vec![
        Level {
            id: LevelId(1),
            name: "Operaciones CRUD".into(),
            difficulty: Difficulty::Beginner,
            pattern_id: "crud".into(),
            epic: epic(
                "epic-1",
                "administrador",
                "gestionar usuarios del sistema",
                "para mantener el control de accesos",
            ),
            expected_stories: vec![
                story(
                    "s1-1",
                    "administrador",
                    "crear nuevos usuarios",
                    "para dar acceso al sistema",
                ),
                story(
                    "s1-2",
                    "administrador",
                    "ver la lista de usuarios",
                    "para conocer quiénes tienen acceso",
                ),
                story(
                    "s1-3",
                    "administrador",
                    "editar datos de usuarios",
                    "para mantener información actualizada",
                ),
                story("s1-4", "administrador", "eliminar usuarios", "para revocar accesos"),
            ],
            hints: hints(&[
                "Piensa en las 4 operaciones básicas: Crear, Leer, Actualizar, Eliminar",
                "Cada operación debería ser una historia independiente",
                "Considera el valor que aporta cada operación",
            ]),
            bonus_points: 100,
        },
        Level {
            id: LevelId(2),
            name: "Pasos del Workflow".into(),
            difficulty: Difficulty::Beginner,
            pattern_id: "workflow".into(),
            epic: epic(
                "epic-2",
                "comprador",
                "realizar una compra online completa",
                "para adquirir productos desde casa",
            ),
            expected_stories: vec![
                story(
                    "s2-1",
                    "comprador",
                    "añadir productos al carrito",
                    "para seleccionar lo que deseo comprar",
                ),
                story("s2-2", "comprador", "ingresar mis datos de envío", "para recibir mi pedido"),
                story(
                    "s2-3",
                    "comprador",
                    "seleccionar método de pago",
                    "para completar la transacción",
                ),
                story("s2-4", "comprador", "confirmar mi pedido", "para finalizar la compra"),
            ],
            hints: hints(&[
                "Identifica cada paso del proceso de compra",
                "El orden de los pasos importa",
                "Cada paso debe ser valioso por sí mismo",
            ]),
            bonus_points: 150,
        },
        Level {
            id: LevelId(3),
            name: "Reglas de Negocio".into(),
            difficulty: Difficulty::Intermediate,
            pattern_id: "business-rules".into(),
            epic: epic(
                "epic-3",
                "usuario",
                "pagar mi pedido de diferentes formas",
                "para tener flexibilidad en el pago",
            ),
            expected_stories: vec![
                story(
                    "s3-1",
                    "usuario",
                    "pagar con tarjeta de crédito",
                    "para usar mi método preferido",
                ),
                story("s3-2", "usuario", "pagar con PayPal", "para mayor seguridad"),
                story("s3-3", "usuario", "pagar contra entrega", "para pagar al recibir"),
                story("s3-4", "usuario", "pagar a plazos", "para distribuir el gasto"),
            ],
            hints: hints(&[
                "Cada método de pago es una regla de negocio diferente",
                "Prioriza los métodos más utilizados",
                "Cada uno puede tener validaciones distintas",
            ]),
            bonus_points: 200,
        },
        Level {
            id: LevelId(4),
            name: "Happy Path vs Edge Cases".into(),
            difficulty: Difficulty::Intermediate,
            pattern_id: "happy-path".into(),
            epic: epic(
                "epic-4",
                "usuario",
                "iniciar sesión en el sistema",
                "para acceder a mi cuenta",
            ),
            expected_stories: vec![
                story(
                    "s4-1",
                    "usuario",
                    "iniciar sesión con credenciales válidas",
                    "para acceder rápidamente",
                ),
                story(
                    "s4-2",
                    "usuario",
                    "recuperar mi contraseña olvidada",
                    "para recuperar acceso",
                ),
                story(
                    "s4-3",
                    "usuario",
                    "ver mensaje cuando mi cuenta está bloqueada",
                    "para saber qué hacer",
                ),
                story(
                    "s4-4",
                    "usuario nuevo",
                    "configurar mi cuenta en primer inicio",
                    "para personalizar mi experiencia",
                ),
            ],
            hints: hints(&[
                "El login exitoso es el \"happy path\"",
                "Contraseña olvidada es un caso común de error",
                "Cuenta bloqueada es un edge case",
                "Primer inicio es un caso especial",
            ]),
            bonus_points: 200,
        },
        Level {
            id: LevelId(5),
            name: "Variaciones de Datos".into(),
            difficulty: Difficulty::Intermediate,
            pattern_id: "data-variations".into(),
            epic: epic(
                "epic-5",
                "usuario",
                "buscar productos en el catálogo",
                "para encontrar lo que necesito",
            ),
            expected_stories: vec![
                story(
                    "s5-1",
                    "usuario",
                    "buscar por nombre de producto",
                    "para encontrar items específicos",
                ),
                story(
                    "s5-2",
                    "usuario",
                    "filtrar por categoría",
                    "para explorar productos similares",
                ),
                story(
                    "s5-3",
                    "usuario",
                    "usar búsqueda avanzada con múltiples criterios",
                    "para refinar resultados",
                ),
                story(
                    "s5-4",
                    "usuario",
                    "ver sugerencias mientras escribo",
                    "para encontrar más rápido",
                ),
            ],
            hints: hints(&[
                "Comienza con la búsqueda más simple",
                "Cada tipo de filtro puede ser una historia",
                "El autocompletado es una mejora adicional",
            ]),
            bonus_points: 250,
        },
        Level {
            id: LevelId(6),
            name: "Interfaces y Plataformas".into(),
            difficulty: Difficulty::Advanced,
            pattern_id: "interfaces".into(),
            epic: epic(
                "epic-6",
                "usuario",
                "recibir notificaciones importantes",
                "para estar informado",
            ),
            expected_stories: vec![
                story(
                    "s6-1",
                    "usuario",
                    "recibir notificaciones en la web",
                    "para verlas al navegar",
                ),
                story(
                    "s6-2",
                    "usuario",
                    "recibir notificaciones por email",
                    "para revisar después",
                ),
                story(
                    "s6-3",
                    "usuario",
                    "recibir push notifications móviles",
                    "para enterarme al instante",
                ),
                story(
                    "s6-4",
                    "usuario",
                    "recibir SMS",
                    "para notificaciones críticas aunque no tenga internet",
                ),
            ],
            hints: hints(&[
                "Cada canal de notificación es una interfaz diferente",
                "Prioriza el canal más utilizado",
                "SMS puede ser solo para urgencias",
            ]),
            bonus_points: 300,
        },
        Level {
            id: LevelId(7),
            name: "Modo Combinado (SPIDR)".into(),
            difficulty: Difficulty::Advanced,
            pattern_id: "workflow".into(),
            epic: epic(
                "epic-7",
                "gerente",
                "generar reportes analíticos del negocio para diferentes áreas",
                "para tomar decisiones informadas",
            ),
            expected_stories: vec![
                story(
                    "s7-1",
                    "gerente",
                    "ver un dashboard básico de ventas",
                    "para monitorear el negocio",
                ),
                story(
                    "s7-2",
                    "gerente",
                    "exportar reportes en PDF",
                    "para compartir con stakeholders",
                ),
                story("s7-3", "gerente", "filtrar reportes por fecha", "para análisis temporal"),
                story(
                    "s7-4",
                    "gerente",
                    "programar envío automático de reportes",
                    "para recibirlos periódicamente",
                ),
            ],
            hints: hints(&[
                "Este nivel combina múltiples patrones",
                "Puedes usar workflow + interfaces + datos",
                "Piensa en qué aporta más valor primero",
            ]),
            bonus_points: 400,
        },
    ]
}
