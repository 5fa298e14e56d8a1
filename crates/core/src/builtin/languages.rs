//! Canonical sample tables, one per language key

use super::BuiltInIntent::{self, *};

pub(super) type LanguageTable = [(BuiltInIntent, &'static [&'static str])];

pub(super) const TABLES: &[(&str, &LanguageTable)] = &[
    ("en", EN),
    ("de", DE),
    ("es", ES),
    ("fr", FR),
    ("it", IT),
    ("ja", JA),
    ("pt", PT),
];

const EN: &LanguageTable = &[
    (HelpIntent, &["help", "help me", "can you help me", "what can I say", "what can you do"]),
    (StopIntent, &["stop", "off", "shut up", "quit", "exit"]),
    (CancelIntent, &["cancel", "never mind", "forget it"]),
    (YesIntent, &["yes", "yeah", "yep", "sure", "of course"]),
    (NoIntent, &["no", "nope", "no thanks", "not really"]),
    (PauseIntent, &["pause", "pause that", "hold on"]),
    (ResumeIntent, &["resume", "continue", "keep going"]),
    (RepeatIntent, &["repeat", "say that again", "repeat that", "come again"]),
    (StartOverIntent, &["start over", "restart", "start again"]),
    (PreviousIntent, &["previous", "go back", "back"]),
    (NextIntent, &["next", "skip", "skip ahead"]),
    (LoopOffIntent, &["loop off", "turn off loop"]),
    (LoopOnIntent, &["loop", "loop on", "turn on loop", "keep repeating this song"]),
    (ShuffleOffIntent, &["shuffle off", "stop shuffling", "turn off shuffle"]),
    (ShuffleOnIntent, &["shuffle", "shuffle on", "shuffle the music", "turn on shuffle"]),
];

const DE: &LanguageTable = &[
    (HelpIntent, &["hilfe", "hilf mir", "kannst du mir helfen", "was kann ich sagen"]),
    (StopIntent, &["stopp", "halt", "aufhören", "beenden"]),
    (CancelIntent, &["abbrechen", "vergiss es", "egal"]),
    (YesIntent, &["ja", "jawohl", "genau", "sicher"]),
    (NoIntent, &["nein", "nee", "nein danke"]),
    (PauseIntent, &["pause", "pausieren", "warte kurz"]),
    (ResumeIntent, &["fortsetzen", "weiter", "mach weiter"]),
    (RepeatIntent, &["wiederholen", "noch einmal", "sag das nochmal"]),
    (StartOverIntent, &["von vorne", "neu starten", "nochmal von vorne"]),
    (PreviousIntent, &["zurück", "vorheriges", "geh zurück"]),
    (NextIntent, &["weiter", "nächstes", "überspringen"]),
    (LoopOffIntent, &["schleife aus", "wiederholung aus"]),
    (LoopOnIntent, &["schleife an", "wiederholung an"]),
    (ShuffleOffIntent, &["zufallswiedergabe aus", "shuffle aus"]),
    (ShuffleOnIntent, &["zufallswiedergabe an", "shuffle an", "mische die musik"]),
];

const ES: &LanguageTable = &[
    (HelpIntent, &["ayuda", "ayúdame", "puedes ayudarme", "qué puedo decir"]),
    (StopIntent, &["para", "detente", "basta", "salir"]),
    (CancelIntent, &["cancelar", "olvídalo", "no importa"]),
    (YesIntent, &["sí", "claro", "por supuesto", "vale"]),
    (NoIntent, &["no", "no gracias", "para nada"]),
    (PauseIntent, &["pausa", "pausar", "espera"]),
    (ResumeIntent, &["continuar", "reanudar", "sigue"]),
    (RepeatIntent, &["repetir", "repite", "dilo otra vez"]),
    (StartOverIntent, &["empezar de nuevo", "reiniciar", "volver a empezar"]),
    (PreviousIntent, &["anterior", "atrás", "regresa"]),
    (NextIntent, &["siguiente", "salta", "próximo"]),
    (LoopOffIntent, &["desactivar repetición", "quitar bucle"]),
    (LoopOnIntent, &["activar repetición", "poner en bucle"]),
    (ShuffleOffIntent, &["desactivar aleatorio", "quitar modo aleatorio"]),
    (ShuffleOnIntent, &["activar aleatorio", "modo aleatorio", "mezcla la música"]),
];

const FR: &LanguageTable = &[
    (HelpIntent, &["aide", "aide-moi", "peux-tu m'aider", "que puis-je dire"]),
    (StopIntent, &["stop", "arrête", "tais-toi", "quitter"]),
    (CancelIntent, &["annuler", "laisse tomber", "oublie"]),
    (YesIntent, &["oui", "ouais", "bien sûr", "d'accord"]),
    (NoIntent, &["non", "non merci", "pas vraiment"]),
    (PauseIntent, &["pause", "mets en pause", "attends"]),
    (ResumeIntent, &["reprendre", "continue", "reprends"]),
    (RepeatIntent, &["répète", "répéter", "redis-le"]),
    (StartOverIntent, &["recommencer", "reprendre depuis le début", "redémarrer"]),
    (PreviousIntent, &["précédent", "retour", "reviens"]),
    (NextIntent, &["suivant", "passe", "prochain"]),
    (LoopOffIntent, &["désactiver la boucle", "arrête la boucle"]),
    (LoopOnIntent, &["activer la boucle", "en boucle"]),
    (ShuffleOffIntent, &["désactiver la lecture aléatoire", "arrête le mode aléatoire"]),
    (ShuffleOnIntent, &["activer la lecture aléatoire", "mode aléatoire", "mélange la musique"]),
];

const IT: &LanguageTable = &[
    (HelpIntent, &["aiuto", "aiutami", "puoi aiutarmi", "cosa posso dire"]),
    (StopIntent, &["stop", "fermati", "basta", "esci"]),
    (CancelIntent, &["annulla", "lascia perdere", "non importa"]),
    (YesIntent, &["sì", "certo", "va bene", "ok"]),
    (NoIntent, &["no", "no grazie", "per niente"]),
    (PauseIntent, &["pausa", "metti in pausa", "aspetta"]),
    (ResumeIntent, &["riprendi", "continua", "vai avanti"]),
    (RepeatIntent, &["ripeti", "ripetilo", "dillo di nuovo"]),
    (StartOverIntent, &["ricomincia", "dall'inizio", "riavvia"]),
    (PreviousIntent, &["precedente", "indietro", "torna indietro"]),
    (NextIntent, &["successivo", "avanti", "salta"]),
    (LoopOffIntent, &["disattiva ripetizione", "togli il loop"]),
    (LoopOnIntent, &["attiva ripetizione", "metti in loop"]),
    (ShuffleOffIntent, &["disattiva riproduzione casuale", "togli shuffle"]),
    (ShuffleOnIntent, &["attiva riproduzione casuale", "shuffle", "mescola la musica"]),
];

const JA: &LanguageTable = &[
    (HelpIntent, &["ヘルプ", "助けて", "使い方を教えて"]),
    (StopIntent, &["ストップ", "止めて", "終了"]),
    (CancelIntent, &["キャンセル", "やめて", "取り消し"]),
    (YesIntent, &["はい", "うん", "そうです"]),
    (NoIntent, &["いいえ", "いや", "違います"]),
    (PauseIntent, &["一時停止", "ちょっと待って"]),
    (ResumeIntent, &["再開", "続けて"]),
    (RepeatIntent, &["もう一度", "繰り返して"]),
    (StartOverIntent, &["最初から", "やり直し"]),
    (PreviousIntent, &["前へ", "戻って"]),
    (NextIntent, &["次へ", "スキップ"]),
    (LoopOffIntent, &["リピートオフ", "リピート解除"]),
    (LoopOnIntent, &["リピートオン", "リピートして"]),
    (ShuffleOffIntent, &["シャッフルオフ", "シャッフル解除"]),
    (ShuffleOnIntent, &["シャッフルオン", "シャッフルして"]),
];

const PT: &LanguageTable = &[
    (HelpIntent, &["ajuda", "me ajuda", "pode me ajudar", "o que eu posso dizer"]),
    (StopIntent, &["pare", "parar", "chega", "sair"]),
    (CancelIntent, &["cancelar", "esquece", "deixa pra lá"]),
    (YesIntent, &["sim", "claro", "com certeza", "pode ser"]),
    (NoIntent, &["não", "não obrigado", "de jeito nenhum"]),
    (PauseIntent, &["pausa", "pausar", "espera"]),
    (ResumeIntent, &["continuar", "retomar", "continua"]),
    (RepeatIntent, &["repetir", "repete", "fala de novo"]),
    (StartOverIntent, &["começar de novo", "recomeçar", "reiniciar"]),
    (PreviousIntent, &["anterior", "voltar", "volta"]),
    (NextIntent, &["próximo", "pular", "avançar"]),
    (LoopOffIntent, &["desativar repetição", "tirar do loop"]),
    (LoopOnIntent, &["ativar repetição", "colocar em loop"]),
    (ShuffleOffIntent, &["desativar aleatório", "tirar do modo aleatório"]),
    (ShuffleOnIntent, &["ativar aleatório", "modo aleatório", "misturar as músicas"]),
];
