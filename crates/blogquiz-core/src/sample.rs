//! Built-in sample posts.
//!
//! Used as the offline fallback when the WordPress API is unreachable, and as
//! the fixture the ranking tests compute literal scores against. Content is
//! carried unchanged from the original blog demo data.

use crate::model::Post;

/// The eight demo articles, in store order.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "L'Intelligenza Artificiale e l'Etica del Consenso: Riflessioni sull'Uso dei Dati Creativi".into(),
            excerpt: "Una riflessione approfondita sul dilemma etico dell'uso dei contenuti creativi per l'addestramento dell'IA. Fino a che punto possiamo accettare che i nostri dati vengano utilizzati senza consenso esplicito? Un'analisi da umanista digitale sul futuro della creatività nell'era dell'intelligenza artificiale.".into(),
            content: "Il progresso tecnologico ci pone di fronte a domande fondamentali sui diritti digitali e la proprietà intellettuale. Come esperto di umanesimo digitale, credo fermamente che ogni innovazione debba mettere l'essere umano al centro. La questione non è se le aziende tech abbiano il diritto legale di usare i nostri contenuti, ma se dovremmo costruire il futuro dell'IA sulle spalle inconsapevoli dei creator.".into(),
            url: "https://umanesimodigitale.info/etica-ia-consenso".into(),
            image: "https://via.placeholder.com/600x400/2C3E50/ffffff?text=Etica+AI".into(),
            date: "15 Gennaio 2025".into(),
            categories: vec!["Intelligenza Artificiale".into(), "Etica Digitale".into(), "Diritti Creativi".into()],
            author: "Franco Bagaglia".into(),
        },
        Post {
            id: 2,
            title: "Democratizzazione del Sapere: Come l'IA Può Rivoluzionare l'Educazione".into(),
            excerpt: "L'intelligenza artificiale rappresenta un'opportunità straordinaria per democratizzare l'accesso alla conoscenza. Esploriamo come le tecnologie AI possono diventare strumenti di empowerment educativo, abbattendo barriere geografiche ed economiche nell'apprendimento continuo.".into(),
            content: "La democratizzazione del sapere attraverso l'IA non è solo una questione tecnica, ma un atto culturale. Come docente universitario in Intelligenza Artificiale, vedo ogni giorno il potenziale trasformativo di queste tecnologie nell'educazione. L'alfabetizzazione sull'IA è un percorso di crescita e consapevolezza critica che può rafforzare l'apprendimento.".into(),
            url: "https://umanesimodigitale.info/democratizzazione-sapere-ia".into(),
            image: "https://via.placeholder.com/600x400/3498DB/ffffff?text=Educazione+AI".into(),
            date: "10 Gennaio 2025".into(),
            categories: vec!["Educazione".into(), "Intelligenza Artificiale".into(), "Democratizzazione".into()],
            author: "Franco Bagaglia".into(),
        },
        Post {
            id: 3,
            title: "Umanesimo Digitale: Abitare con Responsabilità il Mondo Tecnologico".into(),
            excerpt: "Cosa significa essere un umanista digitale nel 2025? Un viaggio tra tecnologia ed etica, dove la vocazione umanistica guida l'innovazione digitale verso un futuro più consapevole, inclusivo e rispettoso della dignità umana.".into(),
            content: "L'umanesimo digitale è una disciplina che integra la tradizione umanistica con le sfide del mondo digitale. Credo profondamente che la tecnologia, se guidata da un'etica umanistica, possa diventare uno straordinario strumento per sostenere l'apprendimento continuo e la crescita personale. La mia missione è formare menti libere, curiose e capaci di abitare con responsabilità il mondo digitale.".into(),
            url: "https://umanesimodigitale.info/umanesimo-digitale-responsabilita".into(),
            image: "https://via.placeholder.com/600x400/E74C3C/ffffff?text=Umanesimo+Digitale".into(),
            date: "5 Gennaio 2025".into(),
            categories: vec!["Umanesimo Digitale".into(), "Filosofia".into(), "Tecnologia".into()],
            author: "Franco Bagaglia".into(),
        },
        Post {
            id: 4,
            title: "L'IA Conversazionale e il Futuro dell'Interazione Umano-Macchina".into(),
            excerpt: "Come l'intelligenza artificiale conversazionale sta trasformando il modo in cui comunichiamo con le macchine. Dall'assistenza virtuale all'apprendimento personalizzato, esploriamo le sfumature comunicative che rendono l'IA sempre più naturale e accessibile.".into(),
            content: "Le IA conversazionali imparano linguaggi naturali e sfumature comunicative dai contenuti online. Questo processo accelera l'innovazione ma solleva questioni etiche sulla proprietà dei dati linguistici. Come possiamo bilanciare progresso tecnologico e rispetto per i creator che contribuiscono inconsapevolmente a questo apprendimento?".into(),
            url: "https://umanesimodigitale.info/ia-conversazionale-futuro".into(),
            image: "https://via.placeholder.com/600x400/9B59B6/ffffff?text=AI+Conversazionale".into(),
            date: "28 Dicembre 2024".into(),
            categories: vec!["Intelligenza Artificiale".into(), "NLP".into(), "Comunicazione".into()],
            author: "Franco Bagaglia".into(),
        },
        Post {
            id: 5,
            title: "Trasparenza nell'AI: Il Diritto di Sapere Come Vengono Usati i Nostri Dati".into(),
            excerpt: "La trasparenza totale nell'utilizzo dei dati per l'addestramento dell'IA non è solo una necessità etica, ma un diritto fondamentale. Esploriamo le proposte per dashboard dettagliate e sistemi di notifica che restituiscono controllo ai creatori di contenuti.".into(),
            content: "Immagino un futuro dove creator e IA lavorano insieme in modo trasparente e mutuamente benefico. Un mondo dove i creator vengono valorizzati come partner nell'evoluzione dell'IA, le tecnologie diventano strumenti creativi potenzianti (non sostitutivi), e l'innovazione procede di pari passo con l'etica umana.".into(),
            url: "https://umanesimodigitale.info/trasparenza-ai-dati".into(),
            image: "https://via.placeholder.com/600x400/1ABC9C/ffffff?text=Trasparenza+AI".into(),
            date: "20 Dicembre 2024".into(),
            categories: vec!["Trasparenza".into(), "Privacy".into(), "Intelligenza Artificiale".into()],
            author: "Franco Bagaglia".into(),
        },
        Post {
            id: 6,
            title: "L'Interprete nell'Era dell'IA: Nuove Competenze per un Mondo Digitale".into(),
            excerpt: "Come l'intelligenza artificiale può rafforzare l'apprendimento linguistico degli interpreti e offrire strumenti preziosi per comprendere le dinamiche sociali contemporanee. Un approccio innovativo alla formazione linguistica nell'era digitale.".into(),
            content: "Integrare l'AI nei percorsi formativi degli interpreti può rafforzare l'apprendimento linguistico e offrire strumenti preziosi per comprendere le dinamiche sociali del nostro tempo. Non si tratta di sostituire le competenze umane, ma di potenziarle attraverso la tecnologia, mantenendo sempre al centro la dimensione umana della comunicazione.".into(),
            url: "https://umanesimodigitale.info/interprete-era-ia".into(),
            image: "https://via.placeholder.com/600x400/F39C12/ffffff?text=Interpreti+AI".into(),
            date: "15 Dicembre 2024".into(),
            categories: vec!["Lingue".into(), "Formazione".into(), "Intelligenza Artificiale".into()],
            author: "Franco Bagaglia".into(),
        },
        Post {
            id: 7,
            title: "Compensazione Equa per i Creator nell'Economia dell'IA".into(),
            excerpt: "Sistemi di royalty e riconoscimento per chi contribuisce all'addestramento dell'intelligenza artificiale. Una proposta concreta per un ecosistema collaborativo dove l'innovazione tecnologica premia chi alimenta il progresso.".into(),
            content: "Non possiamo permettere che l'innovazione corra più veloce della nostra capacità di comprenderla e controllarla. Dobbiamo essere protagonisti attivi, non spettatori passivi, di questa rivoluzione. Propongo sistemi di compensazione equa che riconoscano il valore del contributo creativo all'evoluzione dell'IA.".into(),
            url: "https://umanesimodigitale.info/compensazione-creator-ia".into(),
            image: "https://via.placeholder.com/600x400/E67E22/ffffff?text=Compensazione+Equa".into(),
            date: "8 Dicembre 2024".into(),
            categories: vec!["Economia Digitale".into(), "Diritti".into(), "Intelligenza Artificiale".into()],
            author: "Franco Bagaglia".into(),
        },
        Post {
            id: 8,
            title: "Machine Learning Etico: Principi per un'IA Responsabile".into(),
            excerpt: "Quali principi etici dovrebbero guidare lo sviluppo del machine learning? Un framework umanistico per garantire che l'intelligenza artificiale rispetti i valori fondamentali della società e della dignità umana.".into(),
            content: "Il machine learning etico richiede un approccio multidisciplinare che integri competenze tecniche, filosofiche e sociali. Come umanista digitale, propongo un framework che mette al centro la trasparenza, l'accountability, la fairness e il rispetto per la privacy e l'autonomia individuale.".into(),
            url: "https://umanesimodigitale.info/machine-learning-etico".into(),
            image: "https://via.placeholder.com/600x400/16A085/ffffff?text=ML+Etico".into(),
            date: "1 Dicembre 2024".into(),
            categories: vec!["Machine Learning".into(), "Etica".into(), "Responsabilità".into()],
            author: "Franco Bagaglia".into(),
        },
    ]
}
