//! Sample script catalog

use scripthub_core::ScriptCategory;

use super::ScriptFixture;

pub(crate) static SCRIPTS: &[ScriptFixture] = &[
    ScriptFixture {
        id: "1",
        name: "1-Tick Prayer Flicker",
        description: "Advanced prayer flicking for maximum efficiency. Perfectly times prayer activation to conserve prayer points while maintaining full protection.",
        category: ScriptCategory::Combat,
        author: "PrayerMaster",
        execution_count: 3421,
        favorite: true,
        last_run_mins_ago: Some(120),
        age_days: 30,
        code: r#"; 1-Tick Prayer Flicker v2.1
; Conserves prayer points by flicking protection prayers
#NoEnv
SendMode Input
SetWorkingDir %A_ScriptDir%

; Variables
global prayerActive := false

; F1 - Start prayer flicking
F1::
Loop {
    ; Quick prayer toggle
    Send, {F5}
    Sleep, 50
    Send, {F5}
    Sleep, 550
    
    ; Random delay for anti-ban
    if (A_Index mod 10 == 0) {
        Random, delay, 100, 300
        Sleep, %delay%
    }
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "2",
        name: "Tribrid Gear Switcher",
        description: "Quick gear switching between melee, range, and magic setups. Essential for high-level PvP and PvM encounters.",
        category: ScriptCategory::Combat,
        author: "TribridKing",
        execution_count: 2156,
        favorite: false,
        last_run_mins_ago: Some(300),
        age_days: 45,
        code: r#"; Tribrid Gear Switcher v1.8
; Quick switch between combat styles
#NoEnv
SendMode Input

; Melee setup - F1
F1::
Click, 580, 250 ; Helm
Click, 620, 250 ; Body
Click, 660, 250 ; Legs
Click, 580, 290 ; Weapon
Click, 620, 290 ; Shield
return

; Range setup - F2
F2::
Click, 580, 330 ; Coif
Click, 620, 330 ; Body
Click, 660, 330 ; Chaps
Click, 580, 370 ; Bow
Click, 620, 370 ; Arrows
return

; Mage setup - F3
F3::
Click, 580, 410 ; Hood
Click, 620, 410 ; Robe top
Click, 660, 410 ; Robe bottom
Click, 580, 450 ; Staff
return

F4::Pause
F5::ExitApp"#,
    },
    ScriptFixture {
        id: "3",
        name: "Tick Eating Helper",
        description: "Assists with tick eating mechanics for survival in dangerous PvM situations. Times food consumption perfectly.",
        category: ScriptCategory::Combat,
        author: "TickMaster",
        execution_count: 1823,
        favorite: true,
        last_run_mins_ago: Some(720),
        age_days: 60,
        code: r#"; Tick Eating Helper v1.5
; Perfect timing for tick eating
#NoEnv
SendMode Input

; Variables
global tickCounter := 0

; F1 - Start tick eating
F1::
SetTimer, TickEat, 600
return

TickEat:
tickCounter++
if (tickCounter == 2) {
    ; Eat karambwan
    Click, 580, 290
    Sleep, 50
    ; Eat shark
    Click, 620, 290
    tickCounter := 0
}
return

F2::SetTimer, TickEat, Off
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "4",
        name: "Elite Barbarian Fishing",
        description: "Advanced barbarian fishing with shift-drop, anti-ban delays, and automatic inventory management. Maximizes XP rates.",
        category: ScriptCategory::Fishing,
        author: "FishingElite",
        execution_count: 4892,
        favorite: true,
        last_run_mins_ago: Some(60),
        age_days: 90,
        code: r#"; Elite Barbarian Fishing v3.5
; Shift-drop with anti-ban features
#NoEnv
SendMode Input
SetWorkingDir %A_ScriptDir%

; Configuration
global dropPattern := "vertical" ; vertical or diagonal
global antibanLevel := 3 ; 1-5 (higher = more anti-ban)

F1::
Loop {
    ; Click fishing spot
    Click, 452, 312
    
    ; Wait for inventory
    Random, fishTime, 45000, 65000
    Sleep, %fishTime%
    
    ; Shift drop fish
    Send, {Shift down}
    Loop, 27 {
        x := 580 + Mod(A_Index-1, 4) * 40
        y := 250 + Floor((A_Index-1) / 4) * 35
        Click, %x%, %y%
        Random, dropDelay, 50, 150
        Sleep, %dropDelay%
    }
    Send, {Shift up}
    
    ; Anti-ban movements
    if (Mod(A_Index, antibanLevel) == 0) {
        Random, moveX, 200, 600
        Random, moveY, 200, 400
        MouseMove, %moveX%, %moveY%, 10
        Random, antibanDelay, 500, 2000
        Sleep, %antibanDelay%
    }
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "5",
        name: "Karambwan 1-Tick Fishing",
        description: "Advanced karambwan fishing using 1-tick manipulation for maximum XP rates. Requires precise timing.",
        category: ScriptCategory::Fishing,
        author: "TickFisher",
        execution_count: 2134,
        favorite: false,
        last_run_mins_ago: Some(480),
        age_days: 120,
        code: r#"; Karambwan 1-Tick Fishing v2.0
; Maximizes karambwan catch rate
#NoEnv
SendMode Input

F1::
Loop {
    ; Use karambwanji on spot
    Click, 580, 250
    Sleep, 50
    Click, 423, 298
    
    ; 1-tick timing
    Sleep, 550
    
    ; Click away and back
    Click, 500, 350
    Sleep, 50
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "6",
        name: "Redwood AFK Cutter",
        description: "Semi-AFK redwood cutting with automatic re-clicking when tree depletes. Includes random camera movements.",
        category: ScriptCategory::Woodcutting,
        author: "WoodcutPro",
        execution_count: 3567,
        favorite: true,
        last_run_mins_ago: Some(180),
        age_days: 75,
        code: r#"; Redwood AFK Cutter v2.3
; Semi-AFK woodcutting with re-click
#NoEnv
SendMode Input

F1::
Loop {
    ; Click tree
    Click, 392, 285
    
    ; Wait for tree depletion
    Random, cutTime, 60000, 90000
    Sleep, %cutTime%
    
    ; Random camera movement
    if (Mod(A_Index, 3) == 0) {
        Send, {Left}
        Random, cameraTime, 500, 1500
        Sleep, %cameraTime%
    }
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "7",
        name: "Teak 2-Tick Woodcutter",
        description: "Advanced 2-tick woodcutting method for teaks. Maximizes XP using tick manipulation.",
        category: ScriptCategory::Woodcutting,
        author: "TickChop",
        execution_count: 1456,
        favorite: false,
        last_run_mins_ago: Some(1440),
        age_days: 50,
        code: r#"; Teak 2-Tick Woodcutter v1.7
; 2-tick manipulation for max XP
#NoEnv
SendMode Input

F1::
Loop {
    ; Start 2-tick cycle
    Click, 412, 302 ; Click tree
    Sleep, 600
    
    ; Use herb on tar
    Click, 580, 250
    Sleep, 50
    Click, 620, 250
    Sleep, 600
    
    ; Drop log
    Send, {Shift down}
    Click, 660, 250
    Send, {Shift up}
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "8",
        name: "3-Tick Granite Mining",
        description: "Efficient 3-tick granite mining in the quarry. Uses herb tar method for tick manipulation.",
        category: ScriptCategory::Mining,
        author: "MiningGod",
        execution_count: 2789,
        favorite: true,
        last_run_mins_ago: Some(360),
        age_days: 80,
        code: r#"; 3-Tick Granite Mining v2.8
; Maximum mining XP with tick manipulation
#NoEnv
SendMode Input

F1::
Loop {
    ; Click granite rock
    Click, 445, 318
    Sleep, 600
    
    ; Herb tar tick manipulation
    Click, 580, 250 ; Herb
    Sleep, 50
    Click, 620, 250 ; Tar
    Sleep, 600
    
    ; Drop granite
    Send, {Shift down}
    Click, 660, 250
    Send, {Shift up}
    Sleep, 600
    
    ; Anti-ban check
    if (Mod(A_Index, 20) == 0) {
        Random, pause, 2000, 5000
        Sleep, %pause%
    }
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "9",
        name: "Motherlode Mine Helper",
        description: "Automates Motherlode Mine activities including ore collection, depositing, and sack management.",
        category: ScriptCategory::Mining,
        author: "MLMaster",
        execution_count: 3234,
        favorite: false,
        last_run_mins_ago: Some(240),
        age_days: 65,
        code: r#"; Motherlode Mine Helper v3.1
; Full MLM automation
#NoEnv
SendMode Input

; States
global state := "mining"
global oreCount := 0

F1::
Loop {
    if (state == "mining") {
        ; Mine ore veins
        Click, 423, 298
        Random, mineTime, 3000, 5000
        Sleep, %mineTime%
        oreCount++
        
        if (oreCount >= 26) {
            state := "depositing"
        }
    }
    else if (state == "depositing") {
        ; Run to hopper
        Click, 512, 245
        Sleep, 8000
        
        ; Deposit ore
        Click, 445, 332
        Sleep, 2000
        
        oreCount := 0
        state := "mining"
    }
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "10",
        name: "High Alchemy Pro",
        description: "Efficient high alchemy script with automatic item switching and anti-ban features. Tracks profit/loss.",
        category: ScriptCategory::Magic,
        author: "AlchMaster",
        execution_count: 5678,
        favorite: true,
        last_run_mins_ago: Some(30),
        age_days: 100,
        code: r#"; High Alchemy Pro v4.2
; Automated high alchemy with profit tracking
#NoEnv
SendMode Input

; Variables
global alchCount := 0
global profit := 0

F1::
Loop {
    ; Cast high alchemy
    Send, {F6} ; High alch hotkey
    Sleep, 100
    
    ; Click item
    Click, 620, 290
    
    ; Alchemy delay
    Sleep, 3000
    
    alchCount++
    profit += 150 ; Estimated profit per alch
    
    ; Anti-ban movement
    if (Mod(alchCount, 50) == 0) {
        Random, moveX, 200, 600
        Random, moveY, 200, 400
        MouseMove, %moveX%, %moveY%, 10
        Random, pause, 1000, 3000
        Sleep, %pause%
    }
    
    ; Show stats every 100 alchs
    if (Mod(alchCount, 100) == 0) {
        ToolTip, Alchs: %alchCount% | Profit: %profit%gp
        SetTimer, RemoveToolTip, 3000
    }
}
return

RemoveToolTip:
ToolTip
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "11",
        name: "Superglass Make Banking",
        description: "Automated Superglass Make spell casting with banking. Maximizes crafting XP through magic.",
        category: ScriptCategory::Magic,
        author: "GlassMaker",
        execution_count: 2345,
        favorite: false,
        last_run_mins_ago: Some(1080),
        age_days: 70,
        code: r#"; Superglass Make Banking v2.5
; Efficient glass making with banking
#NoEnv
SendMode Input

F1::
Loop {
    ; Open bank
    Click, 392, 285
    Sleep, 1000
    
    ; Withdraw materials
    Click, 100, 150 ; Bucket of sand
    Click, Right
    Sleep, 100
    Click, 100, 200 ; Withdraw-X
    Send, 18
    Send, {Enter}
    Sleep, 500
    
    Click, 150, 150 ; Seaweed
    Click, Right
    Sleep, 100
    Click, 150, 200 ; Withdraw-X
    Send, 6
    Send, {Enter}
    Sleep, 500
    
    ; Close bank
    Send, {Escape}
    Sleep, 500
    
    ; Cast Superglass Make
    Send, {F7}
    Sleep, 2500
    
    ; Bank glass
    Click, 392, 285
    Sleep, 1000
    Click, 580, 250 ; Deposit inventory
    Sleep, 500
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "12",
        name: "Teleport Trainer",
        description: "Rapid teleport casting for magic training. Cycles through different teleport spells efficiently.",
        category: ScriptCategory::Magic,
        author: "TeleMage",
        execution_count: 1876,
        favorite: false,
        last_run_mins_ago: Some(2880),
        age_days: 85,
        code: r#"; Teleport Trainer v1.9
; Fast magic XP through teleporting
#NoEnv
SendMode Input

F1::
Loop {
    ; Camelot teleport
    Send, {F5}
    Sleep, 2400
    
    ; Random teleport selection
    Random, tele, 1, 3
    if (tele == 1) {
        Send, {F5} ; Camelot
    }
    else if (tele == 2) {
        Send, {F6} ; Ardougne
    }
    else {
        Send, {F7} ; Watchtower
    }
    
    Sleep, 2400
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "13",
        name: "Seers Village Rooftop",
        description: "Complete automation of Seers Village rooftop agility course with mark of grace collection.",
        category: ScriptCategory::Agility,
        author: "AgilityPro",
        execution_count: 4123,
        favorite: true,
        last_run_mins_ago: Some(45),
        age_days: 110,
        code: r#"; Seers Village Rooftop v3.7
; Full rooftop course automation
#NoEnv
SendMode Input

F1::
Loop {
    ; Climb wall
    Click, 445, 302
    Sleep, 7500
    
    ; Jump gap 1
    Click, 423, 285
    Sleep, 4000
    
    ; Tightrope
    Click, 456, 298
    Sleep, 6500
    
    ; Jump gap 2
    Click, 412, 276
    Sleep, 3500
    
    ; Jump gap 3
    Click, 434, 289
    Sleep, 4000
    
    ; Tightrope 2
    Click, 467, 305
    Sleep, 5000
    
    ; Jump to ground
    Click, 445, 312
    Sleep, 4500
    
    ; Check for marks
    PixelSearch, markX, markY, 350, 250, 550, 400, 0xFF0000, 10
    if !ErrorLevel {
        Click, %markX%, %markY%
        Sleep, 1000
    }
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "14",
        name: "Ardougne Rooftop Runner",
        description: "Efficient Ardougne rooftop course running with automatic mark collection and stamina management.",
        category: ScriptCategory::Agility,
        author: "RoofRunner",
        execution_count: 3456,
        favorite: false,
        last_run_mins_ago: Some(600),
        age_days: 95,
        code: r#"; Ardougne Rooftop Runner v2.9
; Ardougne course with stamina potions
#NoEnv
SendMode Input

global lapCount := 0

F1::
Loop {
    ; Start course
    Click, 432, 294
    Sleep, 6000
    
    ; Navigate obstacles
    Loop, 8 {
        Click, 445, 305
        Random, obstacleTime, 3000, 5000
        Sleep, %obstacleTime%
    }
    
    lapCount++
    
    ; Drink stamina every 5 laps
    if (Mod(lapCount, 5) == 0) {
        Click, 700, 250
        Sleep, 500
    }
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "15",
        name: "Varrock Rooftop Course",
        description: "Beginner-friendly Varrock rooftop agility course script. Perfect for levels 30-50.",
        category: ScriptCategory::Agility,
        author: "VarrockRunner",
        execution_count: 2567,
        favorite: false,
        last_run_mins_ago: Some(2160),
        age_days: 75,
        code: r#"; Varrock Rooftop Course v2.1
; Simple and reliable course runner
#NoEnv
SendMode Input

F1::
Loop {
    ; Climb wall
    Click, 423, 287
    Sleep, 5000
    
    ; Jump gaps and balance
    Loop, 6 {
        Click, 445, 300
        Random, wait, 3500, 4500
        Sleep, %wait%
    }
    
    ; Final jump
    Click, 456, 315
    Sleep, 4000
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "16",
        name: "Wintertodt Helper Pro",
        description: "Complete Wintertodt automation including fletching, burning, healing, and brazier repair.",
        category: ScriptCategory::Minigames,
        author: "WinterdtPro",
        execution_count: 3987,
        favorite: true,
        last_run_mins_ago: Some(240),
        age_days: 120,
        code: r#"; Wintertodt Helper Pro v4.5
; Full Wintertodt automation
#NoEnv
SendMode Input

; Variables
global hp := 90
global invFull := false

F1::
Loop {
    ; Check HP
    if (hp < 50) {
        Click, 700, 250 ; Eat food
        Sleep, 600
        hp += 20
    }
    
    ; Chop roots
    if (!invFull) {
        Click, 392, 285
        Random, chopTime, 3000, 5000
        Sleep, %chopTime%
    }
    
    ; Fletch roots
    Click, 580, 250 ; Knife
    Sleep, 50
    Click, 620, 250 ; Roots
    Sleep, 1200
    
    ; Burn at brazier
    Click, 445, 312
    Random, burnTime, 2000, 3000
    Sleep, %burnTime%
    
    ; Random HP loss
    Random, damage, 0, 10
    hp -= damage
    
    ; Fix brazier if needed
    Random, fixChance, 1, 10
    if (fixChance == 1) {
        Click, 445, 312
        Sleep, 5000
    }
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "17",
        name: "Pest Control Points",
        description: "Automated Pest Control participation for void points. Attacks portals and NPCs efficiently.",
        category: ScriptCategory::Minigames,
        author: "VoidHunter",
        execution_count: 2876,
        favorite: false,
        last_run_mins_ago: Some(840),
        age_days: 88,
        code: r#"; Pest Control Points v3.2
; Automated void point farming
#NoEnv
SendMode Input

F1::
Loop {
    ; Attack portal
    Click, 445, 302
    Sleep, 3000
    
    ; Attack spinners
    Loop, 5 {
        Click, 423, 285
        Sleep, 2400
    }
    
    ; Move to next portal
    Random, portal, 1, 4
    if (portal == 1) {
        Click, 350, 250 ; West
    }
    else if (portal == 2) {
        Click, 550, 250 ; East
    }
    else if (portal == 3) {
        Click, 450, 200 ; North
    }
    else {
        Click, 450, 350 ; South
    }
    
    Sleep, 5000
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "18",
        name: "Guardians of the Rift",
        description: "Automated runecrafting at Guardians of the Rift minigame. Mines fragments and charges cells.",
        category: ScriptCategory::Minigames,
        author: "RiftGuardian",
        execution_count: 2134,
        favorite: true,
        last_run_mins_ago: Some(420),
        age_days: 60,
        code: r#"; Guardians of the Rift v2.8
; GOTR automation script
#NoEnv
SendMode Input

F1::
Loop {
    ; Mine fragments
    Click, 412, 298
    Random, mineTime, 8000, 12000
    Sleep, %mineTime%
    
    ; Craft essence
    Click, 580, 250
    Sleep, 50
    Click, 445, 320
    Sleep, 3000
    
    ; Enter portal
    Click, 490, 285
    Sleep, 3000
    
    ; Craft runes
    Click, 445, 302
    Sleep, 2000
    
    ; Exit portal
    Click, 445, 350
    Sleep, 3000
    
    ; Charge cell
    Click, 423, 276
    Sleep, 2000
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "19",
        name: "Tempoross Fisher",
        description: "Automated Tempoross fishing boss. Handles all mechanics including dousing fires and tethering.",
        category: ScriptCategory::Minigames,
        author: "TempoBoss",
        execution_count: 1789,
        favorite: false,
        last_run_mins_ago: Some(1200),
        age_days: 55,
        code: r#"; Tempoross Fisher v2.3
; Full Tempoross automation
#NoEnv
SendMode Input

F1::
Loop {
    ; Fish harpoonfish
    Click, 423, 298
    Random, fishTime, 5000, 8000
    Sleep, %fishTime%
    
    ; Cook fish
    Click, 490, 312
    Sleep, 5000
    
    ; Load cannon
    Click, 445, 285
    Sleep, 1000
    
    ; Douse fires
    Click, 412, 276
    Sleep, 2000
    
    ; Tether to totem
    Click, 467, 302
    Sleep, 3000
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "20",
        name: "NH Tribrid Switcher",
        description: "No-honor tribrid switching for deep wilderness PKing. Includes freeze timers and veng timing.",
        category: ScriptCategory::Pvp,
        author: "DeepWildsPK",
        execution_count: 2456,
        favorite: true,
        last_run_mins_ago: Some(540),
        age_days: 100,
        code: r#"; NH Tribrid Switcher v3.9
; Deep wildy tribrid PKing
#NoEnv
SendMode Input

; Freeze timer
global freezeTimer := 0

F1::  ; Mage switch + freeze
Click, 580, 250 ; Ahrim top
Click, 620, 250 ; Ahrim bottom
Click, 660, 250 ; Staff
Click, 700, 250 ; Occult
Send, {F2} ; Ice barrage
freezeTimer := 20
return

F2::  ; Range switch
Click, 580, 290 ; Black dhide body
Click, 620, 290 ; Black dhide legs
Click, 660, 290 ; Ballista
Click, 700, 290 ; Anguish
return

F3::  ; Melee spec
Click, 580, 330 ; Fighter torso
Click, 620, 330 ; Rune legs
Click, 660, 330 ; AGS
Send, {F1} ; Spec bar
Click, 445, 302 ; Target
return

F4::  ; Veng combo
Send, {F5} ; Vengeance
Sleep, 100
Click, 660, 370 ; Gmaul
Send, {F1} ; Spec
Click, 445, 302
Send, {F1}
Click, 445, 302
return

F5::Pause
F6::ExitApp"#,
    },
    ScriptFixture {
        id: "21",
        name: "LMS Quick Prayers",
        description: "Last Man Standing prayer switching and gear swaps. Essential for competitive LMS.",
        category: ScriptCategory::Pvp,
        author: "LMSChamp",
        execution_count: 3123,
        favorite: false,
        last_run_mins_ago: Some(300),
        age_days: 78,
        code: r#"; LMS Quick Prayers v2.7
; Fast prayer switching for LMS
#NoEnv
SendMode Input

F1::  ; Offensive prayers
Send, {F5} ; Quick prayers
Click, 580, 420 ; Piety
Click, 620, 420 ; Rigour
return

F2::  ; Defensive prayers
Click, 580, 380 ; Protect melee
return

F3::
Click, 620, 380 ; Protect range
return

F4::
Click, 660, 380 ; Protect mage
return

F5::  ; Smite combo
Click, 700, 380 ; Smite
Sleep, 50
Click, 660, 330 ; DDS
Send, {F1}
Click, 445, 302
Send, {F1}
Click, 445, 302
return

F6::Pause
F7::ExitApp"#,
    },
    ScriptFixture {
        id: "22",
        name: "Edge PKing Helper",
        description: "Edgeville PKing assistant with veng timing, spec combos, and safe eating.",
        category: ScriptCategory::Pvp,
        author: "EdgeLord",
        execution_count: 1987,
        favorite: false,
        last_run_mins_ago: Some(2880),
        age_days: 65,
        code: r#"; Edge PKing Helper v2.1
; Edgeville 1v1 PKing
#NoEnv
SendMode Input

F1::  ; AGS to gmaul
Click, 660, 290 ; AGS
Send, {F1}
Click, 445, 302
Sleep, 50
Click, 660, 330 ; Gmaul
Send, {F1}
Click, 445, 302
Send, {F1}
Click, 445, 302
return

F2::  ; Triple eat
Click, 580, 250 ; Shark
Click, 620, 250 ; Karambwan
Click, 660, 250 ; Brew
return

F3::  ; Veng timer
Send, {F5}
SetTimer, VengReady, 30000
return

VengReady:
ToolTip, VENG READY
SetTimer, RemoveTooltip, 2000
return

RemoveTooltip:
ToolTip
return

F4::Pause
F5::ExitApp"#,
    },
    ScriptFixture {
        id: "23",
        name: "Construction Butler Pro",
        description: "Advanced construction training with butler management. Supports all furniture types.",
        category: ScriptCategory::Construction,
        author: "BuildMaster",
        execution_count: 2678,
        favorite: true,
        last_run_mins_ago: Some(660),
        age_days: 92,
        code: r#"; Construction Butler Pro v3.6
; Efficient construction training
#NoEnv
SendMode Input

; Variables
global butlerTimer := 0
global plankCount := 26

F1::
Loop {
    ; Build furniture
    Loop, 6 {
        Click, Right, 445, 302
        Sleep, 100
        Click, 445, 330 ; Build
        Sleep, 100
        Send, 1 ; Oak larder
        Sleep, 1200
        
        Click, Right, 445, 302
        Sleep, 100
        Click, 445, 350 ; Remove
        Sleep, 100
        Send, 1 ; Confirm
        Sleep, 800
        
        plankCount -= 8
    }
    
    ; Call butler
    Click, 380, 285 ; Butler
    Sleep, 500
    Send, 1 ; Fetch planks
    Sleep, 3000
    plankCount := 26
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "24",
        name: "Mahogany Tables",
        description: "Optimized mahogany table construction for maximum XP rates. Includes demon butler timing.",
        category: ScriptCategory::Construction,
        author: "TableMaker",
        execution_count: 1543,
        favorite: false,
        last_run_mins_ago: Some(1560),
        age_days: 58,
        code: r#"; Mahogany Tables v2.4
; Max construction XP/hr
#NoEnv
SendMode Input

F1::
Loop {
    ; Build and remove tables
    Loop, 4 {
        Click, Right, 445, 302
        Sleep, 50
        Click, 445, 330
        Send, 6 ; Mahogany table
        Sleep, 1000
        
        Click, Right, 445, 302
        Sleep, 50
        Click, 445, 350
        Send, 1
        Sleep, 600
    }
    
    ; Demon butler
    Send, {Space} ; Call butler
    Sleep, 2500
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "25",
        name: "Herb Run Master",
        description: "Complete herb farming run covering all patches. Includes disease protection and composting.",
        category: ScriptCategory::Farming,
        author: "HerbFarmer",
        execution_count: 3456,
        favorite: true,
        last_run_mins_ago: Some(120),
        age_days: 85,
        code: r#"; Herb Run Master v4.1
; Efficient herb farming runs
#NoEnv
SendMode Input

F1::
    ; Teleport to Falador
    Send, {F4}
    Sleep, 3000
    
    ; Run to patch
    Click, 523, 245
    Sleep, 5000
    
    ; Harvest herbs
    Click, 445, 302
    Sleep, 3000
    
    ; Note herbs
    Click, 580, 250 ; Herbs
    Sleep, 50
    Click, 380, 290 ; Tool leprechaun
    Sleep, 1000
    
    ; Plant new seed
    Click, 620, 250 ; Seed
    Sleep, 50
    Click, 445, 302 ; Patch
    Sleep, 1000
    
    ; Compost
    Click, 660, 250 ; Ultracompost
    Sleep, 50
    Click, 445, 302
    Sleep, 1000
    
    ; Continue to next patch...
    ToolTip, Moving to Ardougne patch
    Send, {F5} ; Ardougne teleport
    Sleep, 3000
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "26",
        name: "Tree Run Optimizer",
        description: "Automated tree farming runs for all tree and fruit tree patches. Maximizes farming XP.",
        category: ScriptCategory::Farming,
        author: "TreeGrower",
        execution_count: 2123,
        favorite: false,
        last_run_mins_ago: Some(900),
        age_days: 72,
        code: r#"; Tree Run Optimizer v2.9
; Tree and fruit tree runs
#NoEnv
SendMode Input

F1::
Loop, 5 {  ; 5 tree patches
    ; Teleport to patch
    Send, {F%A_Index%}
    Sleep, 3000
    
    ; Check tree health
    Click, 445, 302
    Sleep, 2000
    
    ; Pay farmer
    Click, 380, 290
    Sleep, 500
    Send, 2 ; Pay for protection
    Sleep, 1000
    
    ; Clear and replant
    Click, 445, 302
    Sleep, 2000
    Click, 580, 250 ; Spade
    Click, 445, 302
    Sleep, 2000
    Click, 620, 250 ; Sapling
    Click, 445, 302
    Sleep, 1000
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "27",
        name: "Birdhouse Runner",
        description: "Quick birdhouse run script for passive hunter XP. Covers all birdhouse locations.",
        category: ScriptCategory::Farming,
        author: "BirdKeeper",
        execution_count: 2876,
        favorite: false,
        last_run_mins_ago: Some(480),
        age_days: 63,
        code: r#"; Birdhouse Runner v2.2
; Efficient birdhouse runs
#NoEnv
SendMode Input

F1::
    ; Digsite pendant
    Send, {F8}
    Sleep, 3000
    
    ; Mushroom trees
    Loop, 4 {
        ; Run to birdhouse
        Click, 445 + A_Index*20, 302
        Sleep, 3000
        
        ; Empty and replace
        Click, 445, 302
        Sleep, 1500
        Click, 580, 250 ; Birdhouse
        Click, 445, 302
        Sleep, 1000
        Click, 620, 250 ; Seeds
        Click, 445, 302
        Sleep, 500
    }
    
    ToolTip, Birdhouse run complete!
    SetTimer, RemoveTooltip, 3000
return

RemoveTooltip:
ToolTip
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "28",
        name: "Glass Blowing Pro",
        description: "Efficient glass blowing for crafting XP. Supports all glass items with banking.",
        category: ScriptCategory::Crafting,
        author: "GlassExpert",
        execution_count: 2345,
        favorite: false,
        last_run_mins_ago: Some(1020),
        age_days: 54,
        code: r#"; Glass Blowing Pro v2.6
; Fast crafting XP through glass
#NoEnv
SendMode Input

F1::
Loop {
    ; Bank
    Click, 392, 285
    Sleep, 1000
    Click, 100, 150 ; Molten glass
    Sleep, 500
    Send, {Escape}
    
    ; Craft glass
    Click, 580, 250 ; Pipe
    Click, 620, 250 ; Glass
    Send, 3 ; Lantern lens
    Sleep, 50000 ; Craft all
    
    ; Bank products
    Click, 392, 285
    Sleep, 1000
    Click, 445, 450 ; Deposit all
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "29",
        name: "D'hide Body Crafter",
        description: "Creates dragonhide bodies for profit and XP. Includes thread management.",
        category: ScriptCategory::Crafting,
        author: "HideWorker",
        execution_count: 1876,
        favorite: false,
        last_run_mins_ago: Some(1320),
        age_days: 48,
        code: r#"; D'hide Body Crafter v1.8
; Profitable crafting training
#NoEnv
SendMode Input

F1::
Loop {
    ; Withdraw materials
    Click, 392, 285
    Sleep, 1000
    Click, 100, 150 ; Dragon leather
    Sleep, 500
    Send, {Escape}
    
    ; Craft bodies
    Click, 580, 250 ; Needle
    Click, 620, 250 ; Leather
    Send, 1 ; Black d'hide body
    Sleep, 18000
    
    ; Bank bodies
    Click, 392, 285
    Sleep, 1000
    Click, 580, 250
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "30",
        name: "Blast Furnace Gold",
        description: "Efficient gold bar smelting at Blast Furnace. Includes coffer management and stamina potions.",
        category: ScriptCategory::Smithing,
        author: "BlastMaster",
        execution_count: 3789,
        favorite: true,
        last_run_mins_ago: Some(360),
        age_days: 96,
        code: r#"; Blast Furnace Gold v3.8
; Maximum smithing XP with gold
#NoEnv
SendMode Input

global cofferGold := 10000

F1::
Loop {
    ; Check coffer
    if (cofferGold < 1000) {
        Click, 380, 260 ; Coffer
        Sleep, 500
        Send, 10000
        Send, {Enter}
        cofferGold += 10000
    }
    
    ; Bank
    Click, 392, 285
    Sleep, 1000
    Click, 100, 150 ; Gold ore
    Sleep, 500
    
    ; Stamina dose
    if (Mod(A_Index, 10) == 0) {
        Click, 200, 150
        Sleep, 500
    }
    
    Send, {Escape}
    
    ; Put ore on belt
    Click, 445, 320
    Sleep, 2000
    
    ; Collect bars
    Click, 490, 330
    Sleep, 1000
    
    ; Ice gloves
    Click, 700, 250
    Sleep, 50
    Click, 490, 330
    Sleep, 1000
    
    cofferGold -= 72
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "31",
        name: "Cannonball Maker",
        description: "AFK cannonball smithing for profit. Automatically handles furnace and banking.",
        category: ScriptCategory::Smithing,
        author: "CannonProfit",
        execution_count: 2567,
        favorite: false,
        last_run_mins_ago: Some(1140),
        age_days: 67,
        code: r#"; Cannonball Maker v2.3
; AFK profit with cannonballs
#NoEnv
SendMode Input

F1::
Loop {
    ; Bank
    Click, 392, 285
    Sleep, 1000
    Click, 100, 150 ; Steel bars
    Sleep, 500
    Send, {Escape}
    
    ; Make cannonballs
    Click, 445, 320 ; Furnace
    Sleep, 1000
    Send, {Space} ; Make all
    Sleep, 163000 ; Wait for completion
    
    ; Bank cannonballs
    Click, 392, 285
    Sleep, 1000
    Click, 445, 450
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "32",
        name: "Dart Fletcher Pro",
        description: "High-speed dart fletching for quick fletching XP. Supports all dart types.",
        category: ScriptCategory::Fletching,
        author: "DartMaster",
        execution_count: 2987,
        favorite: false,
        last_run_mins_ago: Some(780),
        age_days: 59,
        code: r#"; Dart Fletcher Pro v2.7
; Fast fletching XP with darts
#NoEnv
SendMode Input

F1::
Loop {
    ; Bank
    Click, 392, 285
    Sleep, 1000
    Click, 100, 150 ; Dart tips
    Click, 150, 150 ; Feathers
    Sleep, 500
    Send, {Escape}
    
    ; Fletch darts
    Click, 580, 250
    Click, 620, 250
    Send, {Space}
    Sleep, 2400
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "33",
        name: "Yew Longbow Stringer",
        description: "Strings yew longbows for profit and fletching XP. Efficient banking included.",
        category: ScriptCategory::Fletching,
        author: "BowStringer",
        execution_count: 2234,
        favorite: false,
        last_run_mins_ago: Some(1500),
        age_days: 51,
        code: r#"; Yew Longbow Stringer v2.1
; Profitable fletching method
#NoEnv
SendMode Input

F1::
Loop {
    ; Bank
    Click, 392, 285
    Sleep, 1000
    Click, 100, 150 ; Yew longbow (u)
    Click, 150, 150 ; Bow string
    Sleep, 500
    Send, {Escape}
    
    ; String bows
    Click, 580, 250
    Click, 620, 250
    Send, {Space}
    Sleep, 17000
    
    ; Bank strung bows
    Click, 392, 285
    Sleep, 1000
    Click, 580, 250
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "34",
        name: "Prayer Potion Maker",
        description: "Creates prayer potions efficiently with banking. Great for ironman accounts.",
        category: ScriptCategory::Herblore,
        author: "PotionBrewer",
        execution_count: 2456,
        favorite: false,
        last_run_mins_ago: Some(960),
        age_days: 62,
        code: r#"; Prayer Potion Maker v2.4
; Efficient prayer potion creation
#NoEnv
SendMode Input

F1::
Loop {
    ; Bank
    Click, 392, 285
    Sleep, 1000
    Click, 100, 150 ; Ranarr potion (unf)
    Click, 150, 150 ; Snape grass
    Sleep, 500
    Send, {Escape}
    
    ; Make potions
    Click, 580, 250
    Click, 620, 250
    Send, {Space}
    Sleep, 17000
    
    ; Bank potions
    Click, 392, 285
    Sleep, 1000
    Click, 580, 250
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "35",
        name: "Herb Cleaner Ultra",
        description: "Fast herb cleaning with banking. Processes hundreds of herbs per hour.",
        category: ScriptCategory::Herblore,
        author: "HerbCleaner",
        execution_count: 1987,
        favorite: false,
        last_run_mins_ago: Some(1680),
        age_days: 49,
        code: r#"; Herb Cleaner Ultra v3.1
; Quick herb cleaning for profit
#NoEnv
SendMode Input

F1::
Loop {
    ; Bank
    Click, 392, 285
    Sleep, 1000
    Click, 100, 150 ; Grimy herbs
    Sleep, 500
    Send, {Escape}
    
    ; Clean herbs
    Loop, 28 {
        x := 580 + Mod(A_Index-1, 4) * 40
        y := 250 + Floor((A_Index-1) / 4) * 35
        Click, %x%, %y%
        Sleep, 50
    }
    
    ; Bank clean herbs
    Click, 392, 285
    Sleep, 1000
    Click, 445, 450
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "36",
        name: "Wine Maker Pro",
        description: "Fast cooking XP through wine making. Handles jug of water and grapes efficiently.",
        category: ScriptCategory::Cooking,
        author: "WineMaker",
        execution_count: 2678,
        favorite: false,
        last_run_mins_ago: Some(600),
        age_days: 56,
        code: r#"; Wine Maker Pro v2.5
; Fastest cooking XP method
#NoEnv
SendMode Input

F1::
Loop {
    ; Bank
    Click, 392, 285
    Sleep, 1000
    Click, 100, 150 ; Jug of water
    Click, 150, 150 ; Grapes
    Sleep, 500
    Send, {Escape}
    
    ; Make wine
    Click, 580, 250
    Click, 620, 250
    Send, {Space}
    Sleep, 2000
    
    ; Bank jugs
    Click, 392, 285
    Sleep, 1000
    Click, 580, 250
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "37",
        name: "Karambwan Cooker",
        description: "1-tick karambwan cooking at Myth's guild or Hosidius range. Maximum cooking XP.",
        category: ScriptCategory::Cooking,
        author: "CookMaster",
        execution_count: 2123,
        favorite: true,
        last_run_mins_ago: Some(1260),
        age_days: 53,
        code: r#"; Karambwan Cooker v3.2
; 1-tick cooking method
#NoEnv
SendMode Input

F1::
Loop {
    ; Bank
    Click, 392, 285
    Sleep, 1000
    Click, 100, 150 ; Raw karambwan
    Sleep, 500
    Send, {Escape}
    
    ; 1-tick cook
    Loop, 28 {
        Click, 580, 250 ; Karambwan
        Click, 445, 320 ; Range
        Send, {Space}
        Sleep, 600
    }
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "38",
        name: "Universal Drop All",
        description: "Drops entire inventory with customizable patterns. Essential for power skilling.",
        category: ScriptCategory::Utility,
        author: "DropMaster",
        execution_count: 5432,
        favorite: true,
        last_run_mins_ago: Some(30),
        age_days: 150,
        code: r#"; Universal Drop All v4.0
; Customizable inventory dropping
#NoEnv
SendMode Input

; Drop patterns
global dropPattern := "vertical" ; vertical, horizontal, diagonal, snake

F1::
Send, {Shift down}
if (dropPattern == "vertical") {
    Loop, 7 {
        col := A_Index - 1
        Loop, 4 {
            x := 580 + col * 40
            y := 250 + (A_Index - 1) * 35
            Click, %x%, %y%
            Sleep, 50
        }
    }
}
else if (dropPattern == "horizontal") {
    Loop, 28 {
        x := 580 + Mod(A_Index-1, 4) * 40
        y := 250 + Floor((A_Index-1) / 4) * 35
        Click, %x%, %y%
        Sleep, 50
    }
}
Send, {Shift up}
return

F2::
dropPattern := dropPattern == "vertical" ? "horizontal" : "vertical"
ToolTip, Pattern: %dropPattern%
SetTimer, RemoveTooltip, 2000
return

RemoveTooltip:
ToolTip
return

F3::Pause
F4::ExitApp"#,
    },
    ScriptFixture {
        id: "39",
        name: "Bank Standing Helper",
        description: "Automates repetitive bank standing skills. Customizable for any bankable skill.",
        category: ScriptCategory::Utility,
        author: "BankStander",
        execution_count: 3876,
        favorite: false,
        last_run_mins_ago: Some(420),
        age_days: 68,
        code: r#"; Bank Standing Helper v3.3
; Universal bank skill automation
#NoEnv
SendMode Input

F1::
Loop {
    ; Open bank
    Click, 392, 285
    Sleep, 1000
    
    ; Withdraw preset
    Send, 1 ; Preset 1
    Sleep, 500
    
    ; Process items
    Click, 580, 250 ; Tool/Item 1
    Click, 620, 250 ; Item 2
    Send, {Space} ; Make all
    
    ; Wait for completion
    Sleep, 20000
    
    ; Deposit all
    Click, 392, 285
    Sleep, 1000
    Click, 445, 450
    Sleep, 500
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "40",
        name: "Camera Rotation Tool",
        description: "Automatically rotates camera for better visibility. Useful for various activities.",
        category: ScriptCategory::Utility,
        author: "CameraMan",
        execution_count: 2345,
        favorite: false,
        last_run_mins_ago: Some(1380),
        age_days: 47,
        code: r#"; Camera Rotation Tool v1.7
; Auto camera management
#NoEnv
SendMode Input

global cameraMode := "slow"

F1::
SetTimer, RotateCamera, 5000
return

RotateCamera:
if (cameraMode == "slow") {
    Send, {Left down}
    Sleep, 500
    Send, {Left up}
}
else if (cameraMode == "fast") {
    Send, {Left down}
    Sleep, 1500
    Send, {Left up}
}
return

F2::
SetTimer, RotateCamera, Off
return

F3::
cameraMode := cameraMode == "slow" ? "fast" : "slow"
ToolTip, Camera: %cameraMode%
SetTimer, RemoveTooltip, 2000
return

RemoveTooltip:
ToolTip
return

F4::ExitApp"#,
    },
    ScriptFixture {
        id: "41",
        name: "Window Quick Switch",
        description: "Quick switching between game client and other applications. Perfect for multi-logging.",
        category: ScriptCategory::Utility,
        author: "WindowPro",
        execution_count: 1765,
        favorite: false,
        last_run_mins_ago: Some(2100),
        age_days: 42,
        code: r#"; Window Quick Switch v2.0
; Fast client switching
#NoEnv
SendMode Input

F1::
WinActivate, RuneLite
return

F2::
WinActivate, RuneLite - 2
return

F3::
WinActivate, Discord
return

F4::
WinActivate, Chrome
return

F5::ExitApp"#,
    },
    ScriptFixture {
        id: "42",
        name: "XP Tracker Logger",
        description: "Logs XP gains and calculates rates. Useful for tracking training efficiency.",
        category: ScriptCategory::Utility,
        author: "XPTracker",
        execution_count: 1543,
        favorite: false,
        last_run_mins_ago: Some(2520),
        age_days: 38,
        code: r#"; XP Tracker Logger v1.5
; Track XP gains over time
#NoEnv
SendMode Input

global startXP := 0
global startTime := 0
global currentXP := 0

F1::  ; Start tracking
startTime := A_TickCount
InputBox, startXP, XP Tracker, Enter current XP:
return

F2::  ; Check rate
InputBox, currentXP, XP Tracker, Enter current XP:
elapsed := (A_TickCount - startTime) / 3600000  ; Hours
xpGained := currentXP - startXP
xpPerHour := Round(xpGained / elapsed)
MsgBox, XP Gained: %xpGained%\nXP/Hour: %xpPerHour%
return

F3::ExitApp"#,
    },
    ScriptFixture {
        id: "43",
        name: "Quick Banking Pro",
        description: "Lightning fast banking with preset support. Reduces banking time significantly.",
        category: ScriptCategory::Banking,
        author: "BankingPro",
        execution_count: 4567,
        favorite: true,
        last_run_mins_ago: Some(60),
        age_days: 130,
        code: r#"; Quick Banking Pro v3.9
; Fastest banking methods
#NoEnv
SendMode Input

; Banking hotkeys
F1::  ; Deposit all
Click, 392, 285
Sleep, 300
Click, 445, 450
Send, {Escape}
return

F2::  ; Load preset 1
Click, 392, 285
Sleep, 300
Send, 1
Send, {Escape}
return

F3::  ; Load preset 2
Click, 392, 285
Sleep, 300
Send, 2
Send, {Escape}
return

F4::  ; Deposit worn items
Click, 392, 285
Sleep, 300
Click, 480, 450
Send, {Escape}
return

F5::  ; Quick withdraw (last item)
Click, 392, 285
Sleep, 300
Click, Right, 100, 150
Click, 100, 230  ; Withdraw all
Send, {Escape}
return

F6::ExitApp"#,
    },
    ScriptFixture {
        id: "44",
        name: "Inventory Organizer",
        description: "Automatically organizes inventory items. Perfect for activities requiring specific layouts.",
        category: ScriptCategory::Banking,
        author: "InvOrganizer",
        execution_count: 2789,
        favorite: false,
        last_run_mins_ago: Some(720),
        age_days: 57,
        code: r#"; Inventory Organizer v2.3
; Auto-organize inventory
#NoEnv
SendMode Input

F1::  ; Organize for combat
; Move food to top rows
Loop, 12 {
    fromX := 580 + Mod(A_Index+15, 4) * 40
    fromY := 250 + Floor((A_Index+15) / 4) * 35
    toX := 580 + Mod(A_Index-1, 4) * 40
    toY := 250 + Floor((A_Index-1) / 4) * 35
    
    Click, %fromX%, %fromY%
    Sleep, 50
    Click, %toX%, %toY%
    Sleep, 50
}
return

F2::  ; Organize for skilling
; Group similar items
ToolTip, Organizing inventory...
; Implementation for grouping
Sleep, 2000
ToolTip
return

F3::ExitApp"#,
    },
    ScriptFixture {
        id: "45",
        name: "Bank Tab Switcher",
        description: "Quick bank tab navigation with hotkeys. Speeds up finding items in organized banks.",
        category: ScriptCategory::Banking,
        author: "TabMaster",
        execution_count: 1987,
        favorite: false,
        last_run_mins_ago: Some(1800),
        age_days: 44,
        code: r#"; Bank Tab Switcher v1.6
; Fast bank tab navigation
#NoEnv
SendMode Input

; Tab hotkeys (F1-F9 for tabs 1-9)
F1::
Click, 392, 285  ; Open bank
Sleep, 300
Click, 50, 50   ; Tab 1
return

F2::
Click, 392, 285
Sleep, 300
Click, 90, 50   ; Tab 2
return

F3::
Click, 392, 285
Sleep, 300
Click, 130, 50  ; Tab 3
return

F4::
Click, 392, 285
Sleep, 300
Click, 170, 50  ; Tab 4
return

F5::
Click, 392, 285
Sleep, 300
Click, 210, 50  ; Tab 5
return

Escape::ExitApp"#,
    },
    ScriptFixture {
        id: "46",
        name: "Vorkath Helper Elite",
        description: "Advanced Vorkath boss helper with acid walk, prayer switches, and woox walk support.",
        category: ScriptCategory::Combat,
        author: "VorkathSlayer",
        execution_count: 3234,
        favorite: true,
        last_run_mins_ago: Some(180),
        age_days: 140,
        code: r#"; Vorkath Helper Elite v4.3
; Complete Vorkath automation
#NoEnv
SendMode Input

global acidPhase := false
global wooxWalk := true

F1::  ; Acid walk
acidPhase := true
Loop {
    if (!acidPhase)
        break
    
    ; Walk pattern
    Click, 400, 300
    Sleep, 1200
    Click, 500, 300
    Sleep, 1200
}
return

F2::  ; Woox walk
if (wooxWalk) {
    Click, 445, 302  ; Attack Vorkath
    Sleep, 1800
    Click, 400, 302  ; Step back
    Sleep, 600
}
return

F3::  ; Prayer switches
Click, 620, 380  ; Protect from magic
Sleep, 100
Click, 580, 420  ; Eagle eye/Rigour
return

F4::  ; Spawn phase
Click, 490, 320  ; Crumble undead
Sleep, 100
Click, 445, 330  ; Click spawn
Sleep, 2400
Click, 620, 380  ; Prayers back on
return

F5::
acidPhase := false
return

F6::ExitApp"#,
    },
    ScriptFixture {
        id: "47",
        name: "Zulrah Rotation Helper",
        description: "Helps with Zulrah rotations and prayer/gear switches. Supports all 4 rotations.",
        category: ScriptCategory::Combat,
        author: "ZulrahMaster",
        execution_count: 2876,
        favorite: false,
        last_run_mins_ago: Some(480),
        age_days: 73,
        code: r#"; Zulrah Rotation Helper v3.5
; Zulrah phase assistance
#NoEnv
SendMode Input

global rotation := 1
global phase := 1

F1::  ; Mage phase
; Mage gear
Click, 580, 250
Click, 620, 250
Click, 660, 250
; Protect from magic
Click, 660, 380
return

F2::  ; Range phase
; Range gear
Click, 580, 290
Click, 620, 290
Click, 660, 290
; Protect from missiles
Click, 620, 380
return

F3::  ; Melee phase (move)
; Run to safe spot
Click, 380, 280
Sleep, 2000
return

F4::  ; Reset rotation
rotation := 1
phase := 1
ToolTip, Rotation reset
SetTimer, RemoveTooltip, 2000
return

RemoveTooltip:
ToolTip
return

F5::ExitApp"#,
    },
    ScriptFixture {
        id: "48",
        name: "Nightmare Zone AFK",
        description: "AFK Nightmare Zone with absorption and overload management. Maximum points per hour.",
        category: ScriptCategory::Combat,
        author: "NMZAfker",
        execution_count: 4123,
        favorite: true,
        last_run_mins_ago: Some(120),
        age_days: 115,
        code: r#"; Nightmare Zone AFK v3.8
; Optimal NMZ setup
#NoEnv
SendMode Input

global absorptionHP := 1000
global overloadTimer := 0

F1::
SetTimer, NMZLoop, 60000  ; Check every minute
return

NMZLoop:
; Drink overload
if (overloadTimer <= 0) {
    Click, 580, 250  ; Overload
    overloadTimer := 5
    Sleep, 500
}

; Drink absorptions
if (absorptionHP < 200) {
    Loop, 4 {
        Click, 620, 250  ; Absorption
        Sleep, 500
    }
    absorptionHP := 1000
}

; Rock cake to 1 HP
Click, 700, 250
Sleep, 100
Click, 700, 250

overloadTimer--
absorptionHP -= 50
return

F2::
SetTimer, NMZLoop, Off
return

F3::ExitApp"#,
    },
    ScriptFixture {
        id: "49",
        name: "Jad Prayer Switcher",
        description: "Perfect prayer switching for TzTok-Jad fight caves. Never miss a prayer flick.",
        category: ScriptCategory::Combat,
        author: "JadKiller",
        execution_count: 2567,
        favorite: false,
        last_run_mins_ago: Some(1440),
        age_days: 82,
        code: r#"; Jad Prayer Switcher v2.9
; Fight caves prayer helper
#NoEnv
SendMode Input

; Sound detection setup
global lastPrayer := "none"

F1::  ; Mage prayer (high pitch sound)
if (lastPrayer != "mage") {
    Click, 660, 380  ; Protect from magic
    lastPrayer := "mage"
    ToolTip, MAGE
}
return

F2::  ; Range prayer (stomp sound)
if (lastPrayer != "range") {
    Click, 620, 380  ; Protect from missiles
    lastPrayer := "range"
    ToolTip, RANGE
}
return

F3::  ; Healers phase
Loop, 4 {
    ; Tag healers
    Click, 400 + A_Index * 30, 320
    Sleep, 1000
}
return

F4::
ToolTip
return

F5::ExitApp"#,
    },
    ScriptFixture {
        id: "50",
        name: "Corrupted Gauntlet Helper",
        description: "Advanced Corrupted Gauntlet assistance including boss prayer switches and tornado dodging.",
        category: ScriptCategory::Combat,
        author: "GauntletGod",
        execution_count: 1876,
        favorite: true,
        last_run_mins_ago: Some(900),
        age_days: 105,
        code: r#"; Corrupted Gauntlet Helper v2.7
; CG boss fight assistance
#NoEnv
SendMode Input

global attackCount := 0
global currentPrayer := "none"

F1::  ; Start boss fight
attackCount := 0
SetTimer, CountAttacks, 600
return

CountAttacks:
attackCount++
if (attackCount == 4) {
    ; Switch prayers
    if (currentPrayer == "mage") {
        Click, 620, 380  ; Range prayer
        currentPrayer := "range"
    }
    else {
        Click, 660, 380  ; Mage prayer
        currentPrayer := "mage"
    }
    attackCount := 0
}
return

F2::  ; Tornado dodge
; Quick movement pattern
Click, 400, 300
Sleep, 600
Click, 500, 300
Sleep, 600
return

F3::  ; 5:1 method
Loop, 5 {
    Click, 445, 302  ; Attack
    Sleep, 1800
}
Click, 400, 300  ; Move
Sleep, 600
return

F4::
SetTimer, CountAttacks, Off
return

F5::ExitApp"#,
    },
    ScriptFixture {
        id: "51",
        name: "Runecraft ZMI Runner",
        description: "Efficient ZMI altar runecrafting with follow patterns and obstacle navigation.",
        category: ScriptCategory::Runecrafting,
        author: "RCMaster",
        execution_count: 2345,
        favorite: false,
        last_run_mins_ago: Some(1080),
        age_days: 61,
        code: r#"; ZMI Runner v2.8
; Ourania altar runecrafting
#NoEnv
SendMode Input

F1::
Loop {
    ; Bank
    Click, 392, 285
    Sleep, 1000
    Click, 100, 150  ; Pure essence
    Sleep, 500
    Send, {Escape}
    
    ; Follow runner
    Click, 445, 302
    Sleep, 12000
    
    ; Craft runes
    Click, 445, 320
    Sleep, 2000
    
    ; Teleport back
    Click, 700, 250  ; Ourania teleport
    Sleep, 3000
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "52",
        name: "Slayer Task Helper",
        description: "Assists with slayer tasks including cannon placement, prayer flicking, and loot management.",
        category: ScriptCategory::Combat,
        author: "SlayerPro",
        execution_count: 3678,
        favorite: true,
        last_run_mins_ago: Some(300),
        age_days: 87,
        code: r#"; Slayer Task Helper v3.4
; Complete slayer automation
#NoEnv
SendMode Input

global cannonBalls := 30

F1::  ; Place and load cannon
Click, 580, 250  ; Cannon base
Sleep, 500
Click, 445, 302  ; Place
Sleep, 1000
Click, 445, 302  ; Load
return

F2::  ; Reload cannon
if (cannonBalls <= 0) {
    Click, 620, 250  ; Cannonballs
    cannonBalls := 30
}
Click, 445, 302
cannonBalls -= 30
return

F3::  ; Loot valuable drops
; Alch rune items
Click, 700, 250  ; High alch
Click, 445, 320  ; Item on ground
Sleep, 3000
return

F4::Pause
F5::ExitApp"#,
    },
    ScriptFixture {
        id: "53",
        name: "Thieving Ardougne Knights",
        description: "Automated pickpocketing of Ardougne Knights with coin pouch opening and food eating.",
        category: ScriptCategory::Thieving,
        author: "ThiefMaster",
        execution_count: 4231,
        favorite: true,
        last_run_mins_ago: Some(240),
        age_days: 125,
        code: r#"; Ardougne Knights Thieving v3.9
; AFK pickpocketing
#NoEnv
SendMode Input

global pouchCount := 0
global hp := 90

F1::
Loop {
    ; Pickpocket
    Click, 445, 302
    Sleep, 650
    pouchCount++
    
    ; Open pouches
    if (pouchCount >= 28) {
        Click, 580, 250
        pouchCount := 0
        Sleep, 500
    }
    
    ; Eat food
    Random, damage, 0, 5
    hp -= damage
    if (hp < 40) {
        Click, 700, 250  ; Food
        hp += 20
        Sleep, 500
    }
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "54",
        name: "Hunter Birdhouse Helper",
        description: "Complete birdhouse run automation with seed filling and nest collection.",
        category: ScriptCategory::Hunter,
        author: "BirdHunter",
        execution_count: 2134,
        favorite: false,
        last_run_mins_ago: Some(1200),
        age_days: 52,
        code: r#"; Hunter Birdhouse Helper v2.1
; Efficient birdhouse runs
#NoEnv
SendMode Input

F1::
Loop, 4 {
    ; Build birdhouse
    Click, 580, 250  ; Logs
    Click, 620, 250  ; Clockwork
    Sleep, 1200
    
    ; Place on spot
    Click, 445, 302
    Sleep, 1000
    
    ; Add seeds
    Click, 660, 250  ; Seeds
    Click, 445, 302
    Sleep, 500
}
return

F2::Pause
F3::ExitApp"#,
    },
    ScriptFixture {
        id: "55",
        name: "Firemaking Wintertodt",
        description: "Specialized Wintertodt script focusing on firemaking XP with fletching disabled.",
        category: ScriptCategory::Firemaking,
        author: "PyroMaster",
        execution_count: 1987,
        favorite: false,
        last_run_mins_ago: Some(1920),
        age_days: 41,
        code: r#"; Firemaking Wintertodt v2.3
; Pure FM XP at WT
#NoEnv
SendMode Input

F1::
Loop {
    ; Chop roots
    Click, 392, 285
    Sleep, 5000
    
    ; Burn at brazier (no fletching)
    Click, 445, 312
    Sleep, 3000
    
    ; Heal if needed
    Click, 700, 250
    Sleep, 500
}
return

F2::Pause
F3::ExitApp"#,
    },
];
